use sea_orm::{IntoActiveModel, Set};
use std::path::PathBuf;
use std::sync::Arc;

use super::dtos::{ProductDetail, ProductFilter, ProductPayload};
use super::entities::product;
use super::repository::{ProductPhotoRepository, ProductRepository};
use crate::modules::category::repository::CategoryRepository;
use crate::modules::toko::repository::TokoRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::upload::{UploadedFile, save_uploaded_file};

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    photos: Arc<dyn ProductPhotoRepository>,
    tokos: Arc<dyn TokoRepository>,
    categories: Arc<dyn CategoryRepository>,
    upload_dir: PathBuf,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        photos: Arc<dyn ProductPhotoRepository>,
        tokos: Arc<dyn TokoRepository>,
        categories: Arc<dyn CategoryRepository>,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            products,
            photos,
            tokos,
            categories,
            upload_dir: upload_dir.into(),
        }
    }

    pub async fn list(&self, filter: ProductFilter) -> AppResult<Vec<product::Model>> {
        self.products.find_all(&filter).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ProductDetail> {
        let product = self.find_product(id).await?;
        self.with_photos(product).await
    }

    /// Places the product in the caller's own store.
    pub async fn create(
        &self,
        caller: i32,
        payload: ProductPayload,
        photos: Vec<UploadedFile>,
    ) -> AppResult<ProductDetail> {
        validate(&payload)?;
        let toko = self
            .tokos
            .find_by_user_id(caller)
            .await?
            .ok_or_else(|| AppError::NotFound("toko not found".to_string()))?;
        self.ensure_category(payload.category_id).await?;

        let slug = payload
            .slug
            .unwrap_or_else(|| slugify(&payload.nama_produk));
        let new_product = product::ActiveModel {
            id_toko: Set(toko.id),
            id_category: Set(payload.category_id),
            nama_produk: Set(payload.nama_produk),
            slug: Set(slug),
            harga_reseller: Set(payload.harga_reseller),
            harga_konsumen: Set(payload.harga_konsumen),
            stok: Set(payload.stok),
            deskripsi: Set(payload.deskripsi),
            ..Default::default()
        };

        let product = self.products.create(new_product).await?;
        tracing::info!("Created product {} in toko {}", product.id, toko.id);

        self.attach_photos(product.id, photos).await?;
        self.with_photos(product).await
    }

    /// Overwrites the editable fields; uploaded photos are appended to the existing ones.
    pub async fn update(
        &self,
        caller: i32,
        id: i32,
        payload: ProductPayload,
        photos: Vec<UploadedFile>,
    ) -> AppResult<ProductDetail> {
        validate(&payload)?;
        let existing = self.find_owned(caller, id).await?;
        self.ensure_category(payload.category_id).await?;

        let slug = payload
            .slug
            .unwrap_or_else(|| slugify(&payload.nama_produk));
        let mut active = existing.into_active_model();
        active.nama_produk = Set(payload.nama_produk);
        active.slug = Set(slug);
        active.id_category = Set(payload.category_id);
        active.harga_reseller = Set(payload.harga_reseller);
        active.harga_konsumen = Set(payload.harga_konsumen);
        active.stok = Set(payload.stok);
        active.deskripsi = Set(payload.deskripsi);

        let product = self.products.update(active).await?;
        self.attach_photos(product.id, photos).await?;
        self.with_photos(product).await
    }

    pub async fn delete(&self, caller: i32, id: i32) -> AppResult<()> {
        let existing = self.find_owned(caller, id).await?;
        self.photos.delete_by_product_id(existing.id).await?;
        self.products.delete(existing.id).await?;
        tracing::info!("Deleted product {}", existing.id);
        Ok(())
    }

    async fn find_product(&self, id: i32) -> AppResult<product::Model> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))
    }

    async fn find_owned(&self, caller: i32, id: i32) -> AppResult<product::Model> {
        let product = self.find_product(id).await?;
        let owns = self
            .tokos
            .find_by_id(product.id_toko)
            .await?
            .is_some_and(|toko| toko.id_user == caller);
        if !owns {
            return Err(AppError::Forbidden(
                "you can only modify products of your own toko".to_string(),
            ));
        }
        Ok(product)
    }

    async fn ensure_category(&self, id: i32) -> AppResult<()> {
        self.categories
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))
    }

    // Each file is saved and recorded on its own; the first failure stops the rest.
    async fn attach_photos(&self, id_produk: i32, photos: Vec<UploadedFile>) -> AppResult<()> {
        for photo in photos {
            let file_name = save_uploaded_file(&self.upload_dir, &photo).await?;
            self.photos.create(id_produk, file_name).await?;
        }
        Ok(())
    }

    async fn with_photos(&self, product: product::Model) -> AppResult<ProductDetail> {
        let photos = self.photos.find_by_product_id(product.id).await?;
        Ok(ProductDetail { product, photos })
    }
}

fn validate(payload: &ProductPayload) -> AppResult<()> {
    if payload.nama_produk.trim().is_empty() {
        return Err(AppError::BadRequest("nama_produk is required".to_string()));
    }
    if payload.harga_reseller < 0 || payload.harga_konsumen < 0 {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    if payload.stok < 0 {
        return Err(AppError::BadRequest("stok must not be negative".to_string()));
    }
    Ok(())
}

/// Lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::entities::category;
    use crate::modules::toko::entities::toko;
    use crate::modules::users::entities::user;
    use crate::shared::infra::repository::InMemoryDatabase;
    use crate::shared::repository::Repositories;

    struct Fixture {
        service: ProductService,
        repos: Repositories,
        owner: user::Model,
        category: category::Model,
        _dir: tempfile::TempDir,
    }

    async fn seed_user(repos: &Repositories, no_telp: &str) -> user::Model {
        let new_user = user::ActiveModel {
            nama: Set("Budi".to_string()),
            email: Set(format!("{}@example.com", no_telp)),
            kata_sandi: Set("hash".to_string()),
            no_telp: Set(no_telp.to_string()),
            tanggal_lahir: Set(None),
            jenis_kelamin: Set(None),
            tentang: Set(None),
            pekerjaan: Set(None),
            id_provinsi: Set(None),
            id_kota: Set(None),
            is_admin: Set(false),
            ..Default::default()
        };
        let new_toko = toko::ActiveModel {
            nama_toko: Set(format!("Toko {}", no_telp)),
            url_foto: Set(None),
            ..Default::default()
        };
        repos
            .users
            .create_user_with_toko(new_user, new_toko)
            .await
            .unwrap()
    }

    async fn setup() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let repos = Repositories::in_memory(InMemoryDatabase::new());
        let service = ProductService::new(
            repos.products.clone(),
            repos.product_photos.clone(),
            repos.tokos.clone(),
            repos.categories.clone(),
            dir.path(),
        );
        let owner = seed_user(&repos, "0811").await;
        let category = repos
            .categories
            .create(category::ActiveModel {
                nama_category: Set("Sepatu".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        Fixture {
            service,
            repos,
            owner,
            category,
            _dir: dir,
        }
    }

    fn payload(category_id: i32, nama: &str, harga: i64) -> ProductPayload {
        ProductPayload {
            nama_produk: nama.to_string(),
            slug: None,
            category_id,
            harga_reseller: harga - 100,
            harga_konsumen: harga,
            stok: 5,
            deskripsi: None,
        }
    }

    fn photo(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content: vec![0xFF, 0xD8],
        }
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Sepatu Lari -- Pria! "), "sepatu-lari-pria");
    }

    #[tokio::test]
    async fn create_places_product_in_callers_store() {
        let fx = setup().await;

        let detail = fx
            .service
            .create(
                fx.owner.id,
                payload(fx.category.id, "Sepatu Lari", 1000),
                vec![photo("a.png"), photo("b.png")],
            )
            .await
            .unwrap();

        let toko = fx.repos.tokos.find_by_user_id(fx.owner.id).await.unwrap().unwrap();
        assert_eq!(detail.product.id_toko, toko.id);
        assert_eq!(detail.product.slug, "sepatu-lari");
        assert_eq!(detail.photos.len(), 2);
    }

    #[tokio::test]
    async fn create_with_unknown_category_is_not_found() {
        let fx = setup().await;

        let result = fx
            .service
            .create(fx.owner.id, payload(99, "Sepatu", 1000), vec![])
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_appends_photos() {
        let fx = setup().await;
        let created = fx
            .service
            .create(
                fx.owner.id,
                payload(fx.category.id, "Sepatu", 1000),
                vec![photo("a.png")],
            )
            .await
            .unwrap();

        let updated = fx
            .service
            .update(
                fx.owner.id,
                created.product.id,
                payload(fx.category.id, "Sepatu Baru", 1200),
                vec![photo("b.png")],
            )
            .await
            .unwrap();

        assert_eq!(updated.product.nama_produk, "Sepatu Baru");
        assert_eq!(updated.product.harga_konsumen, 1200);
        assert_eq!(updated.photos.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_all_photo_rows() {
        let fx = setup().await;
        let created = fx
            .service
            .create(
                fx.owner.id,
                payload(fx.category.id, "Sepatu", 1000),
                vec![photo("a.png"), photo("b.png")],
            )
            .await
            .unwrap();

        fx.service.delete(fx.owner.id, created.product.id).await.unwrap();

        let photos = fx
            .repos
            .product_photos
            .find_by_product_id(created.product.id)
            .await
            .unwrap();
        assert!(photos.is_empty());
        assert!(matches!(
            fx.service.get_by_id(created.product.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn non_owner_cannot_update_or_delete() {
        let fx = setup().await;
        let intruder = seed_user(&fx.repos, "0822").await;
        let created = fx
            .service
            .create(fx.owner.id, payload(fx.category.id, "Sepatu", 1000), vec![])
            .await
            .unwrap();

        let update = fx
            .service
            .update(
                intruder.id,
                created.product.id,
                payload(fx.category.id, "Curian", 1),
                vec![],
            )
            .await;
        let delete = fx.service.delete(intruder.id, created.product.id).await;

        assert!(matches!(update, Err(AppError::Forbidden(_))));
        assert!(matches!(delete, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn list_combines_filters() {
        let fx = setup().await;
        for (nama, harga) in [("Sepatu Lari", 1000), ("Sepatu Bola", 3000), ("Kaos", 1500)] {
            fx.service
                .create(fx.owner.id, payload(fx.category.id, nama, harga), vec![])
                .await
                .unwrap();
        }

        let filter = ProductFilter {
            nama_produk: Some("Sepatu".to_string()),
            max_harga: Some(2000),
            ..Default::default()
        };
        let found = fx.service.list(filter).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].nama_produk, "Sepatu Lari");
        assert_eq!(fx.service.list(ProductFilter::default()).await.unwrap().len(), 3);
    }
}
