use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct LimitOffsetParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    50
}

impl Default for LimitOffsetParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl LimitOffsetParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

/// Page envelope: a bounded slice of results plus total-count metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub limit: u32,
    pub offset: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, params: &LimitOffsetParams) -> Self {
        Self {
            items,
            total,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = LimitOffsetParams::default();
        assert_eq!(params.limit, 50);
        assert_eq!(params.offset, 0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        let params = LimitOffsetParams {
            limit: 0,
            offset: 0,
        };
        assert!(params.validate().is_err());

        let params = LimitOffsetParams {
            limit: 101,
            offset: 0,
        };
        assert!(params.validate().is_err());

        let params = LimitOffsetParams {
            limit: 100,
            offset: 500,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_page_metadata() {
        let params = LimitOffsetParams {
            limit: 2,
            offset: 2,
        };
        let page = Page::new(vec!["c", "d"], 5, &params);
        assert_eq!(page.items, vec!["c", "d"]);
        assert_eq!(page.total, 5);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 2);
    }
}
