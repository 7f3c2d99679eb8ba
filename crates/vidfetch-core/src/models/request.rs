//! Inbound request bodies and the playlist slice derived from pagination.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Body for `?action=search`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "keyword must not be empty"))]
    pub keyword: String,

    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be a positive integer"))]
    pub page: u32,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 50, message = "pageSize must be between 1 and 50"))]
    pub page_size: u32,
}

impl SearchRequest {
    /// Playlist slice for this page. Computed in u64 so `page * page_size`
    /// cannot overflow for any valid u32 input.
    pub fn slice(&self) -> PlaylistSlice {
        let page = u64::from(self.page);
        let page_size = u64::from(self.page_size);
        PlaylistSlice {
            start_index: (page - 1) * page_size + 1,
            end_index: page * page_size,
        }
    }
}

/// 1-based inclusive bounds passed to the tool's playlist selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistSlice {
    pub start_index: u64,
    pub end_index: u64,
}

/// Body for `?action=info` and `?action=download`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LookupRequest {
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(keyword: &str, page: u32, page_size: u32) -> SearchRequest {
        SearchRequest {
            keyword: keyword.to_string(),
            page,
            page_size,
        }
    }

    #[test]
    fn test_slice_first_page() {
        let slice = search("rust", 1, 20).slice();
        assert_eq!(slice.start_index, 1);
        assert_eq!(slice.end_index, 20);
    }

    #[test]
    fn test_slice_later_page() {
        let slice = search("rust", 3, 10).slice();
        assert_eq!(slice.start_index, 21);
        assert_eq!(slice.end_index, 30);
    }

    #[test]
    fn test_slice_does_not_overflow_for_max_page() {
        let slice = search("rust", u32::MAX, 50).slice();
        assert_eq!(slice.end_index, u64::from(u32::MAX) * 50);
        assert_eq!(slice.start_index, slice.end_index - 49);
    }

    #[test]
    fn test_search_defaults_applied() {
        let req: SearchRequest = serde_json::from_value(serde_json::json!({
            "keyword": "rust tutorials"
        }))
        .unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 20);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_search_page_size_accepts_camel_case() {
        let req: SearchRequest = serde_json::from_value(serde_json::json!({
            "keyword": "rust",
            "page": 2,
            "pageSize": 5
        }))
        .unwrap();
        assert_eq!(req.page_size, 5);
    }

    #[test]
    fn test_search_rejects_empty_keyword() {
        let req = search("", 1, 20);
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("keyword"));
    }

    #[test]
    fn test_search_rejects_out_of_range_page_size() {
        for page_size in [0, 51] {
            let req = search("rust", 1, page_size);
            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("page_size"));
        }
    }

    #[test]
    fn test_lookup_rejects_invalid_url() {
        let req = LookupRequest {
            url: "not-a-url".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_lookup_accepts_valid_url() {
        let req = LookupRequest {
            url: "https://example.com/v".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
