use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 照片分類，對應 CMS 中 photo.category 欄位的值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PhotoCategory {
    Portrait,
    Landscape,
}

impl PhotoCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoCategory::Portrait => "portrait",
            PhotoCategory::Landscape => "landscape",
        }
    }
}

impl fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(PhotoCategory::Portrait),
            "landscape" => Ok(PhotoCategory::Landscape),
            other => Err(format!(
                "unknown photo category '{}' (expected 'portrait' or 'landscape')",
                other
            )),
        }
    }
}

/// Request body for creating a comment. The CMS expects the payload wrapped
/// in a `data` envelope; nothing is validated locally (empty author/content
/// are accepted and forwarded as-is).
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub data: CommentData<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentData<'a> {
    pub author_name: &'a str,
    pub content: &'a str,
    pub article: u64,
}

impl<'a> NewComment<'a> {
    pub fn new(article_id: u64, author: &'a str, content: &'a str) -> Self {
        Self {
            data: CommentData {
                author_name: author,
                content,
                article: article_id,
            },
        }
    }
}
