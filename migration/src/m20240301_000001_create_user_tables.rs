use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users Table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Nama).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::KataSandi).string().not_null())
                    .col(ColumnDef::new(Users::NoTelp).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::TanggalLahir).date())
                    .col(ColumnDef::new(Users::JenisKelamin).string())
                    .col(ColumnDef::new(Users::Tentang).text())
                    .col(ColumnDef::new(Users::Pekerjaan).string())
                    .col(ColumnDef::new(Users::IdProvinsi).integer())
                    .col(ColumnDef::new(Users::IdKota).integer())
                    .col(
                        ColumnDef::new(Users::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Alamat Table
        manager
            .create_table(
                Table::create()
                    .table(Alamat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alamat::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alamat::IdUser).integer().not_null())
                    .col(ColumnDef::new(Alamat::JudulAlamat).string().not_null())
                    .col(ColumnDef::new(Alamat::NamaPenerima).string().not_null())
                    .col(ColumnDef::new(Alamat::NoTelp).string().not_null())
                    .col(ColumnDef::new(Alamat::DetailAlamat).string().not_null())
                    .col(
                        ColumnDef::new(Alamat::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Alamat::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alamat_user")
                            .from(Alamat::Table, Alamat::IdUser)
                            .to(Users::Table, Users::Id)
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
                    .name("idx_alamat_id_user")
                    .table(Alamat::Table)
                    .col(Alamat::IdUser)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alamat::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Nama,
    Email,
    KataSandi,
    NoTelp,
    TanggalLahir,
    JenisKelamin,
    Tentang,
    Pekerjaan,
    IdProvinsi,
    IdKota,
    IsAdmin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Alamat {
    Table,
    Id,
    IdUser,
    JudulAlamat,
    NamaPenerima,
    NoTelp,
    DetailAlamat,
    CreatedAt,
    UpdatedAt,
}
