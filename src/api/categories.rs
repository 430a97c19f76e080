//! Category Requests

use super::{get_json, post_form, text_form, ApiResult, SubmitStatus, CATEGORIES_PATH};
use crate::config::Config;
use crate::draft::FIELD_NAME;
use crate::models::{CategoriesResponse, Category};

pub async fn fetch_categories(config: &Config) -> ApiResult<Vec<Category>> {
    let body: CategoriesResponse = get_json(config, CATEGORIES_PATH).await?;
    Ok(body.categories)
}

pub async fn create_category(config: &Config, name: &str) -> ApiResult<SubmitStatus> {
    let form = text_form(&[(FIELD_NAME, name)])?;
    post_form(config, CATEGORIES_PATH, form).await
}
