use serde::Deserialize;

/// Pagination metadata returned alongside every list page.
#[derive(Clone, Debug, Deserialize)]
pub struct PageInfo {
    pub count: u64,
    pub pages: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// One page of list results: `{info: {next: URL|null, ...}, results: [...]}`.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// The minimal character record shown in the scrollable list.
#[derive(Clone, Debug, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ResourceRef {
    pub name: String,
}

/// The full character record shown in the detail card.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterDetail {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
    pub image: String,
    pub url: String,
    pub origin: ResourceRef,
    pub location: ResourceRef,
    pub episode: Vec<String>,
}
