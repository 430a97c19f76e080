//! Item Requests
//!
//! `GET /items` and the multipart `POST /items`.

use web_sys::File;

use super::{get_json, post_form, text_form, ApiError, ApiResult, SubmitStatus, ITEMS_PATH};
use crate::config::Config;
use crate::draft::{NewItem, FIELD_IMAGE};
use crate::models::{Item, ItemsResponse};

pub async fn fetch_items(config: &Config) -> ApiResult<Vec<Item>> {
    let body: ItemsResponse = get_json(config, ITEMS_PATH).await?;
    Ok(body.items)
}

/// Create an item: `name`, `category` and the `image` file as one multipart body
pub async fn create_item(config: &Config, item: &NewItem<'_, File>) -> ApiResult<SubmitStatus> {
    let form = text_form(&item.text_fields())?;
    form.append_with_blob_and_filename(FIELD_IMAGE, item.image, &item.image.name())
        .map_err(ApiError::form)?;
    post_form(config, ITEMS_PATH, form).await
}
