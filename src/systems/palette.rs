//! Category accent colors for the orbit overlay

use folio_content::Category;

/// Accent color for a stack category, linear RGB.
pub fn accent_for(category: Category) -> [f32; 3] {
    match category {
        Category::Frontend => [0.38, 0.65, 1.0],
        Category::Backend => [0.42, 0.9, 0.56],
        Category::Database => [0.95, 0.72, 0.3],
        Category::DevOps => [0.9, 0.45, 0.4],
        Category::Tools => [0.62, 0.58, 0.95],
        Category::Design => [0.92, 0.5, 0.78],
    }
}
