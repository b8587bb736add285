//! Employee Context - Value Objects

/// 员工唯一标识
///
/// 由存储引擎在首次持久化时分配，之后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 员工草稿 - 尚未分配 ID 的员工数据
///
/// 创建和整体更新时使用，四个可变字段全部必填
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub age: i32,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        department: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
            position: position.into(),
        }
    }
}

/// 搜索关键字
///
/// 不变量: 关键字非空。空字符串等同于未提供关键字
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// 解析可选关键字，`None` 或空字符串返回 `None`
    pub fn parse(raw: Option<String>) -> Option<Self> {
        raw.filter(|s| !s.is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_absent_or_empty() {
        assert_eq!(SearchTerm::parse(None), None);
        assert_eq!(SearchTerm::parse(Some(String::new())), None);
    }

    #[test]
    fn test_search_term_kept_verbatim() {
        let term = SearchTerm::parse(Some(" Ann ".to_string())).unwrap();
        assert_eq!(term.as_str(), " Ann ");
    }

    #[test]
    fn test_employee_id_display() {
        assert_eq!(EmployeeId::new(42).to_string(), "42");
        assert_eq!(EmployeeId::from(7).value(), 7);
    }
}
