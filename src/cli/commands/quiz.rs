//! Readiness quiz command handler

use tuition_pathways::core::analytics::AnalyticsSink;
use tuition_pathways::core::assessment::{ReadinessQuiz, QUESTIONS};
use tuition_pathways::core::catalog::PricingTable;

/// Print the questions, or score the given answers
pub fn run(
    table: &PricingTable,
    analytics: &dyn AnalyticsSink,
    answers: &[usize],
    json: bool,
) -> Result<(), String> {
    if answers.is_empty() {
        print_questions();
        return Ok(());
    }

    let mut quiz = ReadinessQuiz::new(analytics);
    for (question, &answer) in answers.iter().enumerate() {
        quiz.answer(question, answer).map_err(|e| format!("✗ {e}"))?;
    }
    let result = quiz.result().ok_or_else(|| {
        format!(
            "✗ Expected {} answers, got {}",
            QUESTIONS.len(),
            answers.len()
        )
    })?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("✗ Failed to serialize result: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("\n=== Readiness: {} ===\n", result.tier);
    println!("Score: {}/{}", result.score, result.max_score);
    println!("\nRecommended programs:");
    for code in &result.recommended {
        match table.program(code) {
            Some(program) => println!("  {:<12} {}", program.code, program.name),
            None => println!("  {code}"),
        }
    }
    Ok(())
}

fn print_questions() {
    println!("\n=== Program readiness quiz ===");
    for (i, question) in QUESTIONS.iter().enumerate() {
        println!("\n{}. {}", i + 1, question.prompt);
        for (j, option) in question.options.iter().enumerate() {
            println!("   [{j}] {}", option.label);
        }
    }
    println!(
        "\nAnswer with: pathways quiz --answers {}",
        vec!["N"; QUESTIONS.len()].join(",")
    );
}
