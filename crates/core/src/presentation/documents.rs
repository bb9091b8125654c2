//! Uploaded documents section

use hrms_domain::constants::NO_DOCUMENTS_MESSAGE;
use hrms_domain::{format_display_date, DocumentMeta};
use serde::Serialize;

use super::format::format_file_size;

const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub file_name: Option<&'a str>,
    pub uploaded_on: String,
    pub size: Option<String>,
}

impl<'a> From<&'a DocumentMeta> for DocumentCard<'a> {
    fn from(document: &'a DocumentMeta) -> Self {
        Self {
            id: &document.id,
            title: &document.title,
            file_name: document.file_name.as_deref(),
            uploaded_on: format_display_date(&document.uploaded_at),
            size: document.size_bytes.map(format_file_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentGroup<'a> {
    pub category: &'a str,
    pub cards: Vec<DocumentCard<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsSection<'a> {
    /// Categories in the order they first appear
    pub groups: Vec<DocumentGroup<'a>>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<'a> DocumentsSection<'a> {
    pub fn of(documents: &'a [DocumentMeta]) -> Self {
        let mut groups: Vec<DocumentGroup<'a>> = Vec::new();
        for document in documents {
            let category = document
                .category
                .as_deref()
                .map(str::trim)
                .filter(|category| !category.is_empty())
                .unwrap_or(UNCATEGORIZED);

            match groups.iter_mut().find(|group| group.category == category) {
                Some(group) => group.cards.push(DocumentCard::from(document)),
                None => groups.push(DocumentGroup { category, cards: vec![DocumentCard::from(document)] }),
            }
        }

        Self {
            groups,
            total: documents.len(),
            empty_message: documents.is_empty().then_some(NO_DOCUMENTS_MESSAGE),
        }
    }
}
