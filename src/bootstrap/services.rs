use std::sync::Arc;

use crate::modules::auth::service::AuthService;
use crate::modules::category::service::CategoryService;
use crate::modules::product::service::ProductService;
use crate::modules::toko::service::TokoService;
use crate::modules::trx::service::TrxService;
use crate::modules::users::service::UserService;
use crate::shared::config::Config;
use crate::shared::repository::Repositories;
use crate::shared::state::AppState;

/// Wires every service onto one set of repositories.
pub fn build_state(config: Arc<Config>, repos: Repositories) -> AppState {
    let upload_dir = config.upload_dir.clone();

    AppState {
        auth_service: AuthService::new(repos.users.clone(), config.clone()),
        user_service: UserService::new(repos.users.clone(), repos.alamat.clone()),
        category_service: CategoryService::new(repos.categories.clone(), repos.users.clone()),
        toko_service: TokoService::new(repos.tokos.clone(), upload_dir.clone()),
        product_service: ProductService::new(
            repos.products.clone(),
            repos.product_photos.clone(),
            repos.tokos.clone(),
            repos.categories.clone(),
            upload_dir,
        ),
        trx_service: TrxService::new(repos.trxs, repos.products, repos.alamat),
        config,
    }
}
