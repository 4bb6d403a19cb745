use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_user_tables::{Alamat, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Trx Table
        manager
            .create_table(
                Table::create()
                    .table(Trx::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trx::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trx::IdUser).integer().not_null())
                    .col(ColumnDef::new(Trx::AlamatPengiriman).integer().not_null())
                    .col(
                        ColumnDef::new(Trx::KodeInvoice)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Trx::MethodBayar).string().not_null())
                    .col(ColumnDef::new(Trx::HargaTotal).big_integer().not_null())
                    .col(
                        ColumnDef::new(Trx::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Trx::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trx_user")
                            .from(Trx::Table, Trx::IdUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trx_alamat")
                            .from(Trx::Table, Trx::AlamatPengiriman)
                            .to(Alamat::Table, Alamat::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_trx_id_user")
                    .table(Trx::Table)
                    .col(Trx::IdUser)
                    .to_owned(),
            )
            .await?;

        // Detail Trx Table; product and store ids are plain references
        manager
            .create_table(
                Table::create()
                    .table(DetailTrx::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DetailTrx::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DetailTrx::IdTrx).integer().not_null())
                    .col(ColumnDef::new(DetailTrx::IdProduk).integer().not_null())
                    .col(ColumnDef::new(DetailTrx::IdToko).integer().not_null())
                    .col(ColumnDef::new(DetailTrx::Kuantitas).integer().not_null())
                    .col(ColumnDef::new(DetailTrx::HargaTotal).big_integer().not_null())
                    .col(
                        ColumnDef::new(DetailTrx::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DetailTrx::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_detail_trx_trx")
                            .from(DetailTrx::Table, DetailTrx::IdTrx)
                            .to(Trx::Table, Trx::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_detail_trx_id_trx")
                    .table(DetailTrx::Table)
                    .col(DetailTrx::IdTrx)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DetailTrx::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Trx::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Trx {
    Table,
    Id,
    IdUser,
    AlamatPengiriman,
    KodeInvoice,
    MethodBayar,
    HargaTotal,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DetailTrx {
    Table,
    Id,
    IdTrx,
    IdProduk,
    IdToko,
    Kuantitas,
    HargaTotal,
    CreatedAt,
    UpdatedAt,
}
