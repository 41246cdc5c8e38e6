#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardInfo {
    pub id: String,
    pub name: String,
    pub closed: bool,
    pub description: String,
    pub short_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInfo {
    pub id: String,
    pub name: String,
}
