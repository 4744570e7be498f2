use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "directory.html")]
pub struct DirectoryTemplate {
    pub total: usize,
    /// Configured station name, empty when none is set.
    pub station: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "map.html")]
pub struct MapTemplate {}
