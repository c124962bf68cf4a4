pub(crate) mod eager;
pub(crate) mod lazy;

/// 连接风格：分隔符、前缀与后缀。
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct JoinStyle {
    pub(crate) delimiter: String,
    pub(crate) prefix: String,
    pub(crate) postfix: String,
}

impl JoinStyle {
    pub(crate) fn sep(delimiter: &str) -> JoinStyle {
        JoinStyle { delimiter: delimiter.to_string(), ..JoinStyle::default() }
    }

    pub(crate) fn wrap(delimiter: &str, prefix: &str, postfix: &str) -> JoinStyle {
        JoinStyle {
            delimiter: delimiter.to_string(),
            prefix: prefix.to_string(),
            postfix: postfix.to_string(),
        }
    }
}

// 两种求值模式对同一条流水线的同一终结操作必须给出相同的最终结果，
// 差异只允许出现在中间物化与副作用交错上。
#[cfg(test)]
mod tests {
    use super::JoinStyle;
    use super::eager::EagerPipe;
    use super::lazy::LazyPipe;
    use crate::SqRes;
    use crate::err::SqErr;

    fn parse(s: &'static str) -> SqRes<i64> {
        s.parse::<i64>()
            .map_err(|err| SqErr::StageFailed { op: "parse", element: s.to_string(), reason: err.to_string() })
    }

    #[test]
    fn test_map_filter_results_match() {
        let source = vec![1_i64, 2, 3, 4, 5, 6];
        let lazy = LazyPipe::of(source.clone()).map(|x| x * x).filter(|x| x % 2 == 0).to_vec();
        let eager = EagerPipe::of(source).map(|x| x * x).filter(|x| x % 2 == 0).to_vec();
        assert_eq!(lazy, eager);
        assert_eq!(Ok(vec![4, 16, 36]), lazy);
    }

    #[test]
    fn test_find_results_match() {
        let source = vec![1_i64, 2, 3, 4];
        let lazy = LazyPipe::of(source.clone()).map(|x| x * x).find(|x| *x > 3);
        let eager = EagerPipe::of(source).map(|x| x * x).find(|x| *x > 3);
        assert_eq!(lazy, eager);
        assert_eq!(Ok(Some(4)), lazy);
    }

    #[test]
    fn test_sum_and_count_results_match() {
        let source = vec![3_i64, 1, 4, 1, 5];
        assert_eq!(
            LazyPipe::of(source.clone()).filter(|x| *x > 1).sum::<i64>(),
            EagerPipe::of(source.clone()).filter(|x| *x > 1).sum::<i64>(),
        );
        assert_eq!(
            LazyPipe::of(source.clone()).filter(|x| *x > 1).count(),
            EagerPipe::of(source).filter(|x| *x > 1).count(),
        );
    }

    #[test]
    fn test_group_by_results_match() {
        let source = vec!["a".to_string(), "ab".to_string(), "b".to_string()];
        let lazy = LazyPipe::of(source.clone()).group_by(|s| s.len());
        let eager = EagerPipe::of(source).group_by(|s| s.len());
        assert_eq!(lazy, eager);
    }

    #[test]
    fn test_extremes_and_quantifiers_match() {
        let source = vec![("Bob", 31_i64), ("Mark", 20), ("Carol", 31)];
        assert_eq!(
            LazyPipe::of(source.clone()).max_by_key(|p| p.1),
            EagerPipe::of(source.clone()).max_by_key(|p| p.1),
        );
        assert_eq!(
            LazyPipe::of(source.clone()).min_by_key(|p| p.1),
            EagerPipe::of(source.clone()).min_by_key(|p| p.1),
        );
        assert_eq!(
            LazyPipe::of(source.clone()).all(|p| p.1 >= 20),
            EagerPipe::of(source.clone()).all(|p| p.1 >= 20),
        );
        assert_eq!(
            LazyPipe::of(source.clone()).any(|p| p.1 > 40),
            EagerPipe::of(source).any(|p| p.1 > 40),
        );
    }

    #[test]
    fn test_flat_map_uniq_join_match() {
        let source = vec!["abc", "ade"];
        let style = JoinStyle::wrap("-", "<", ">");
        let lazy = LazyPipe::of(source.clone())
            .flat_map(|s| s.chars().collect::<Vec<_>>())
            .uniq()
            .join_with(&style);
        let eager = EagerPipe::of(source)
            .flat_map(|s| s.chars().collect::<Vec<_>>())
            .uniq()
            .join_with(&style);
        assert_eq!(lazy, eager);
        assert_eq!(Ok("<a-b-c-d-e>".to_string()), lazy);
    }

    #[test]
    fn test_take_while_results_match() {
        let source = vec![1_i64, 2, 3, 10, 2];
        let lazy = LazyPipe::of(source.clone()).take_while(|x| *x < 5).to_vec();
        let eager = EagerPipe::of(source).take_while(|x| *x < 5).to_vec();
        assert_eq!(lazy, eager);
        assert_eq!(Ok(vec![1, 2, 3]), lazy);
    }

    #[test]
    fn test_stage_failure_matches() {
        let lazy = LazyPipe::of(vec!["1", "2", "x", "4"]).try_map(parse).to_vec();
        let eager = EagerPipe::of(vec!["1", "2", "x", "4"]).try_map(parse).to_vec();
        assert_eq!(lazy, eager);
        assert!(matches!(lazy, Err(SqErr::StageFailed { .. })));
    }
}
