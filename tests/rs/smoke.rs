//! Integration smoke tests for `tuition_pathways`

use tuition_pathways::core::catalog::{CourseCatalog, PricingTable};
use tuition_pathways::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn builtin_tables_load() {
    assert!(!PricingTable::builtin().programs().is_empty());
    assert!(!CourseCatalog::builtin().courses().is_empty());
    assert_eq!(CourseCatalog::builtin().pillars().len(), 4);
}
