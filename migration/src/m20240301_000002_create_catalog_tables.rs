use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_user_tables::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn timestamps(table: &mut TableCreateStatement, created: impl IntoIden, updated: impl IntoIden) {
    table
        .col(
            ColumnDef::new(created)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(updated)
                .timestamp()
                .not_null()
                .default(Expr::current_timestamp()),
        );
}

fn index(name: &str, table: impl IntoIden + 'static, col: impl IntoIden + 'static) -> IndexCreateStatement {
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(col)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Toko Table; one store per user
        let mut toko = Table::create();
        toko.table(Toko::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Toko::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Toko::IdUser).integer().not_null().unique_key())
            .col(ColumnDef::new(Toko::NamaToko).string().not_null())
            .col(ColumnDef::new(Toko::UrlFoto).string())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_toko_user")
                    .from(Toko::Table, Toko::IdUser)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            );
        timestamps(&mut toko, Toko::CreatedAt, Toko::UpdatedAt);
        manager.create_table(toko).await?;

        // Category Table
        let mut category = Table::create();
        category
            .table(Category::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Category::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Category::NamaCategory).string().not_null());
        timestamps(&mut category, Category::CreatedAt, Category::UpdatedAt);
        manager.create_table(category).await?;

        // Produk Table. Catalog references are indexed only, deletes never cascade.
        let mut produk = Table::create();
        produk
            .table(Produk::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Produk::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Produk::IdToko).integer().not_null())
            .col(ColumnDef::new(Produk::IdCategory).integer().not_null())
            .col(ColumnDef::new(Produk::NamaProduk).string().not_null())
            .col(ColumnDef::new(Produk::Slug).string().not_null())
            .col(ColumnDef::new(Produk::HargaReseller).big_integer().not_null())
            .col(ColumnDef::new(Produk::HargaKonsumen).big_integer().not_null())
            .col(ColumnDef::new(Produk::Stok).integer().not_null().default(0))
            .col(ColumnDef::new(Produk::Deskripsi).text());
        timestamps(&mut produk, Produk::CreatedAt, Produk::UpdatedAt);
        manager.create_table(produk).await?;

        manager
            .create_index(index("idx_produk_id_toko", Produk::Table, Produk::IdToko))
            .await?;
        manager
            .create_index(index(
                "idx_produk_id_category",
                Produk::Table,
                Produk::IdCategory,
            ))
            .await?;

        // Foto Produk Table
        let mut foto = Table::create();
        foto.table(FotoProduk::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(FotoProduk::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(FotoProduk::IdProduk).integer().not_null())
            .col(ColumnDef::new(FotoProduk::Url).string().not_null());
        timestamps(&mut foto, FotoProduk::CreatedAt, FotoProduk::UpdatedAt);
        manager.create_table(foto).await?;

        manager
            .create_index(index(
                "idx_foto_produk_id_produk",
                FotoProduk::Table,
                FotoProduk::IdProduk,
            ))
            .await?;

        // Log Produk Table (snapshot rows; nothing writes them yet)
        let mut log = Table::create();
        log.table(LogProduk::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(LogProduk::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(LogProduk::IdProduk).integer().not_null())
            .col(ColumnDef::new(LogProduk::IdToko).integer().not_null())
            .col(ColumnDef::new(LogProduk::IdCategory).integer().not_null())
            .col(ColumnDef::new(LogProduk::NamaProduk).string().not_null())
            .col(ColumnDef::new(LogProduk::Slug).string().not_null())
            .col(ColumnDef::new(LogProduk::HargaReseller).big_integer().not_null())
            .col(ColumnDef::new(LogProduk::HargaKonsumen).big_integer().not_null())
            .col(ColumnDef::new(LogProduk::Deskripsi).text());
        timestamps(&mut log, LogProduk::CreatedAt, LogProduk::UpdatedAt);
        manager.create_table(log).await?;

        manager
            .create_index(index(
                "idx_log_produk_id_produk",
                LogProduk::Table,
                LogProduk::IdProduk,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogProduk::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FotoProduk::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Produk::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Toko::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Toko {
    Table,
    Id,
    IdUser,
    NamaToko,
    UrlFoto,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    NamaCategory,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Produk {
    Table,
    Id,
    IdToko,
    IdCategory,
    NamaProduk,
    Slug,
    HargaReseller,
    HargaKonsumen,
    Stok,
    Deskripsi,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FotoProduk {
    Table,
    Id,
    IdProduk,
    Url,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LogProduk {
    Table,
    Id,
    IdProduk,
    IdToko,
    IdCategory,
    NamaProduk,
    Slug,
    HargaReseller,
    HargaKonsumen,
    Deskripsi,
    CreatedAt,
    UpdatedAt,
}
