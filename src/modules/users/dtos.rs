use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserDto {
    pub nama: String,
    pub kata_sandi: String,
    pub no_telp: String,
    pub email: String,
    pub tanggal_lahir: Option<NaiveDate>,
    pub jenis_kelamin: Option<String>,
    pub tentang: Option<String>,
    pub pekerjaan: Option<String>,
    pub id_provinsi: Option<i32>,
    pub id_kota: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginDto {
    pub no_telp: String,
    pub kata_sandi: String,
}

/// Full replacement of the editable profile fields; an empty `kata_sandi` keeps the current hash.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileDto {
    pub nama: String,
    pub email: String,
    pub no_telp: String,
    #[serde(default)]
    pub kata_sandi: Option<String>,
    pub tanggal_lahir: Option<NaiveDate>,
    pub jenis_kelamin: Option<String>,
    pub tentang: Option<String>,
    pub pekerjaan: Option<String>,
    pub id_provinsi: Option<i32>,
    pub id_kota: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlamatDto {
    pub judul_alamat: String,
    pub nama_penerima: String,
    pub no_telp: String,
    pub detail_alamat: String,
}
