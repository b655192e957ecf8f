pub async fn view_update_genre() -> &'static str {
    "NOT IMPLEMENTED: Genre update GET"
}

pub async fn post_update_genre() -> &'static str {
    "NOT IMPLEMENTED: Genre update POST"
}
