use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub nama_category: String,
}
