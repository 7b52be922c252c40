use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of event recorded in the activity journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "checkout")]
    Checkout,
    #[serde(rename = "return_book")]
    Return,
    #[serde(rename = "add_book")]
    AddBook,
    #[serde(rename = "add_wishlist")]
    AddWishlist,
    #[serde(rename = "fulfill_wishlist")]
    FulfillWishlist,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Checkout => "Checked out",
            ActivityType::Return => "Returned",
            ActivityType::AddBook => "Added to catalog",
            ActivityType::AddWishlist => "Added to wishlist",
            ActivityType::FulfillWishlist => "Fulfilled wishlist item",
        }
    }
}

/// One row of the activity journal shown on the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub kind: ActivityType,
    pub timestamp: DateTime<Utc>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
    pub student_library_id: Option<String>,
    pub additional_info: Option<String>,
}

impl Activity {
    pub fn new(kind: ActivityType) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            timestamp: Utc::now(),
            book_title: None,
            book_author: None,
            student_library_id: None,
            additional_info: None,
        }
    }

    pub fn with_book(mut self, title: impl Into<String>, author: impl Into<String>) -> Self {
        self.book_title = Some(title.into());
        self.book_author = Some(author.into());
        self
    }

    pub fn with_student(mut self, library_id: impl Into<String>) -> Self {
        self.student_library_id = Some(library_id.into());
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}
