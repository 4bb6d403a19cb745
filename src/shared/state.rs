use axum::extract::FromRef;
use std::sync::Arc;

use crate::modules::auth::service::AuthService;
use crate::modules::category::service::CategoryService;
use crate::modules::product::service::ProductService;
use crate::modules::toko::service::TokoService;
use crate::modules::trx::service::TrxService;
use crate::modules::users::service::UserService;
use crate::shared::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub category_service: CategoryService,
    pub toko_service: TokoService,
    pub product_service: ProductService,
    pub trx_service: TrxService,
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
