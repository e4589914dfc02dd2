//! Builder for the CMS query-string conventions (Strapi bracket syntax):
//! `filters[field][$op]=value`, `populate[...]=...`, `sort=field:dir`,
//! `pagination[limit]=n`. Parameters keep insertion order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `$eq` — exact match
    Eq,
    /// `$ne` — not equal
    Ne,
    /// `$containsi` — case-insensitive substring match
    ContainsInsensitive,
}

impl FilterOp {
    fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "$eq",
            FilterOp::Ne => "$ne",
            FilterOp::ContainsInsensitive => "$containsi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `filters[field][$op]=value`
    pub fn filter(mut self, field: &str, op: FilterOp, value: &str) -> Self {
        self.params.push((
            format!("filters[{}][{}]", field, op.as_str()),
            value.to_string(),
        ));
        self
    }

    /// `populate=relation`
    pub fn populate(mut self, relation: &str) -> Self {
        self.params.push(("populate".to_string(), relation.to_string()));
        self
    }

    /// `populate[field]=true`
    pub fn populate_flag(mut self, field: &str) -> Self {
        self.params
            .push((format!("populate[{}]", field), "true".to_string()));
        self
    }

    /// `populate[parent][populate]=child`
    pub fn populate_nested(mut self, parent: &str, child: &str) -> Self {
        self.params
            .push((format!("populate[{}][populate]", parent), child.to_string()));
        self
    }

    /// `populate[0]=a&populate[1]=b&...`
    pub fn populate_list(mut self, relations: &[&str]) -> Self {
        for (i, relation) in relations.iter().enumerate() {
            self.params
                .push((format!("populate[{}]", i), relation.to_string()));
        }
        self
    }

    /// `sort=field:dir`
    pub fn sort(mut self, field: &str, dir: SortDir) -> Self {
        self.params
            .push(("sort".to_string(), format!("{}:{}", field, dir.as_str())));
        self
    }

    /// `pagination[limit]=n`
    pub fn limit(mut self, n: u32) -> Self {
        self.params
            .push(("pagination[limit]".to_string(), n.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Key/value pairs in insertion order, ready for `reqwest`'s `.query()`.
    pub fn as_params(&self) -> &[(String, String)] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &Query) -> Vec<(&str, &str)> {
        query
            .as_params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_filter_rendering() {
        let query = Query::new()
            .filter("slug", FilterOp::Eq, "first-light")
            .filter("slug", FilterOp::Ne, "post-1")
            .filter("title", FilterOp::ContainsInsensitive, "dolomites");
        assert_eq!(
            pairs(&query),
            vec![
                ("filters[slug][$eq]", "first-light"),
                ("filters[slug][$ne]", "post-1"),
                ("filters[title][$containsi]", "dolomites"),
            ]
        );
    }

    #[test]
    fn test_populate_variants() {
        let query = Query::new()
            .populate("image")
            .populate_flag("cover_image")
            .populate_nested("author", "headshot")
            .populate_list(&["cover_image", "comments"]);
        assert_eq!(
            pairs(&query),
            vec![
                ("populate", "image"),
                ("populate[cover_image]", "true"),
                ("populate[author][populate]", "headshot"),
                ("populate[0]", "cover_image"),
                ("populate[1]", "comments"),
            ]
        );
    }

    #[test]
    fn test_sort_and_limit() {
        let query = Query::new().sort("publishedAt", SortDir::Desc).limit(3);
        assert_eq!(
            pairs(&query),
            vec![("sort", "publishedAt:desc"), ("pagination[limit]", "3")]
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(Query::new().is_empty());
    }
}
