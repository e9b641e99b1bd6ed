use std::path::PathBuf;
use include_dir::{include_dir, Dir};
use rocket::http::ContentType;

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

fn embedded(path: &str) -> Option<(ContentType, &'static [u8])> {
    let file = STATIC_DIR.get_file(path)?;
    let content_type = file.path()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Binary);
    Some((content_type, file.contents()))
}

#[rocket::get("/")]
pub async fn index() -> Option<(ContentType, &'static [u8])> {
    embedded("index.html")
}

/// Serves embedded assets; unknown paths outside the API get the front page.
#[rocket::get("/<path..>", rank = 20)]
pub async fn static_handler(path: PathBuf) -> Option<(ContentType, &'static [u8])> {
    if path.starts_with("api") {
        return None;
    }
    let requested = path.to_string_lossy().replace('\\', "/");
    embedded(&requested).or_else(|| embedded("index.html"))
}
