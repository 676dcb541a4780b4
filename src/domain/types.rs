// ==========================================
// 仓储库存管理系统 - 领域类型定义
// ==========================================
// 职责: 过期等级、排序字段、排序方向、分类过滤条件
// 红线: 过期等级是"等级制",由剩余天数唯一决定
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ==========================================
// 过期等级 (Severity)
// ==========================================
// 顺序: Expired < Critical < NearTerm < Normal（越靠前越紧急）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Expired,  // 已过期 (days <= 0)
    Critical, // 临界 (1..=7)
    NearTerm, // 近期 (8..=30)
    Normal,   // 正常 (> 30)
}

impl Severity {
    /// 展示层徽章样式提示
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Severity::Expired => "danger",
            Severity::Critical => "warning",
            Severity::NearTerm => "primary",
            Severity::Normal => "secondary",
        }
    }

    /// i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Severity::Expired => "severity.expired",
            Severity::Critical => "severity.critical",
            Severity::NearTerm => "severity.near_term",
            Severity::Normal => "severity.normal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Expired => write!(f, "EXPIRED"),
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::NearTerm => write!(f, "NEAR_TERM"),
            Severity::Normal => write!(f, "NORMAL"),
        }
    }
}

// ==========================================
// 排序字段 (Sort Field)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Sku,
    Price,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Sku => write!(f, "sku"),
            SortField::Price => write!(f, "price"),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "sku" => Ok(SortField::Sku),
            "price" => Ok(SortField::Price),
            _ => Err(DomainError::invalid("sortField", s, "name/sku/price")),
        }
    }
}

// ==========================================
// 排序方向 (Sort Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(DomainError::invalid("sortDirection", s, "asc/desc")),
        }
    }
}

// ==========================================
// 分类过滤 (Category Filter)
// ==========================================
// All: 不过滤; Id(n): 精确匹配 category_id
// 序列化形态: "all" 或裸整数（如 2）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "CategoryFilterRepr", into = "CategoryFilterRepr")]
pub enum CategoryFilter {
    #[default]
    All,
    Id(i64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CategoryFilterRepr {
    Id(i64),
    Keyword(String),
}

impl TryFrom<CategoryFilterRepr> for CategoryFilter {
    type Error = DomainError;

    fn try_from(repr: CategoryFilterRepr) -> Result<Self, Self::Error> {
        match repr {
            CategoryFilterRepr::Id(id) => Ok(CategoryFilter::Id(id)),
            CategoryFilterRepr::Keyword(keyword) if keyword == "all" => Ok(CategoryFilter::All),
            CategoryFilterRepr::Keyword(keyword) => {
                Err(DomainError::invalid("categoryId", &keyword, "\"all\" 或整数"))
            }
        }
    }
}

impl From<CategoryFilter> for CategoryFilterRepr {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => CategoryFilterRepr::Keyword("all".to_string()),
            CategoryFilter::Id(id) => CategoryFilterRepr::Id(id),
        }
    }
}

impl CategoryFilter {
    /// 判断分类引用是否命中
    pub fn matches(&self, category_id: Option<i64>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => category_id == Some(*id),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value
            .parse::<i64>()
            .map(CategoryFilter::Id)
            .map_err(|_| DomainError::invalid("categoryId", value, "all 或整数"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_display_and_order() {
        assert_eq!(Severity::NearTerm.to_string(), "NEAR_TERM");
        assert!(Severity::Expired < Severity::Critical);
        assert!(Severity::NearTerm < Severity::Normal);
        assert_eq!(Severity::Critical.badge_variant(), "warning");
    }

    #[test]
    fn test_parse_sort_options() {
        assert_eq!("Price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!("descending".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert!("weight".parse::<SortField>().is_err());
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_parse_category_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("12".parse::<CategoryFilter>().unwrap(), CategoryFilter::Id(12));
        assert!(matches!(
            "food".parse::<CategoryFilter>(),
            Err(DomainError::InvalidValue { field: "categoryId", .. })
        ));
    }

    #[test]
    fn test_category_filter_wire_shape() {
        assert_eq!(serde_json::to_string(&CategoryFilter::Id(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&CategoryFilter::All).unwrap(), "\"all\"");
        assert_eq!(serde_json::from_str::<CategoryFilter>("7").unwrap(), CategoryFilter::Id(7));
        assert_eq!(
            serde_json::from_str::<CategoryFilter>("\"all\"").unwrap(),
            CategoryFilter::All
        );
        assert!(serde_json::from_str::<CategoryFilter>("\"food\"").is_err());
        assert!(serde_json::from_str::<CategoryFilter>("{\"id\":2}").is_err());
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(None));
        assert!(CategoryFilter::Id(3).matches(Some(3)));
        assert!(!CategoryFilter::Id(3).matches(Some(4)));
        assert!(!CategoryFilter::Id(3).matches(None));
    }
}
