use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::Display;
use std::str::FromStr;

use super::entities::{product, product_photo};
use crate::shared::error::AppResult;
use crate::shared::upload::FormData;

/// Query string filters for the product list; every field is optional and they combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub nama_produk: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub toko_id: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_harga: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_harga: Option<i64>,
}

impl ProductFilter {
    pub fn matches(&self, product: &product::Model) -> bool {
        self.nama_produk
            .as_deref()
            .map_or(true, |name| product.nama_produk.contains(name))
            && self.category_id.map_or(true, |id| product.id_category == id)
            && self.toko_id.map_or(true, |id| product.id_toko == id)
            && self.min_harga.map_or(true, |min| product.harga_konsumen >= min)
            && self.max_harga.map_or(true, |max| product.harga_konsumen <= max)
    }
}

// `?category_id=` arrives as an empty string from most HTML forms.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Text fields of the product create/update form.
#[derive(Debug, Clone)]
pub struct ProductPayload {
    pub nama_produk: String,
    pub slug: Option<String>,
    pub category_id: i32,
    pub harga_reseller: i64,
    pub harga_konsumen: i64,
    pub stok: i32,
    pub deskripsi: Option<String>,
}

impl ProductPayload {
    pub fn from_form(form: &FormData) -> AppResult<Self> {
        Ok(Self {
            nama_produk: form.require_text("nama_produk")?,
            slug: form
                .text("slug")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            category_id: form.require("category_id")?,
            harga_reseller: form.require("harga_reseller")?,
            harga_konsumen: form.require("harga_konsumen")?,
            stok: form.require("stok")?,
            deskripsi: form.text("deskripsi").map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: product::Model,
    pub photos: Vec<product_photo::Model>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::Uri};

    #[test]
    fn empty_query_values_are_ignored() {
        let uri: Uri = "/api/product?nama_produk=&category_id=&min_harga=1000"
            .parse()
            .unwrap();
        let Query(filter) = Query::<ProductFilter>::try_from_uri(&uri).unwrap();

        assert_eq!(filter.nama_produk, None);
        assert_eq!(filter.category_id, None);
        assert_eq!(filter.min_harga, Some(1000));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let uri: Uri = "/api/product?toko_id=abc".parse().unwrap();
        assert!(Query::<ProductFilter>::try_from_uri(&uri).is_err());
    }
}
