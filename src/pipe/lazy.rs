use crate::SqRes;
use crate::pipe::JoinStyle;
use itertools::{Itertools, process_results};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::{Sum, once, successors};

/// 惰性流水线：元素逐个穿过全部阶段，阶段通过包装上游迭代器组合，
/// 只有终结操作会按需拉取源元素，不物化任何中间容器。
///
/// 内部元素携带`Result`：某个阶段的失败作为值流向终结操作，
/// 失败元素之后的源元素不再被拉取。
///
/// 流水线是一次性的：终结操作排空底层迭代器之后，
/// 再次调用终结操作将确定性地得到空结果。
pub(crate) struct LazyPipe<T> {
    iter: Box<dyn Iterator<Item = SqRes<T>>>,
}

impl<T: 'static> LazyPipe<T> {
    pub(crate) fn of(items: Vec<T>) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(items.into_iter().map(Ok)) }
    }

    pub(crate) fn from_iter(iter: impl Iterator<Item = T> + 'static) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(iter.map(Ok)) }
    }

    /// 无界生成源：以`seed`起始，由前一个元素计算下一个元素。
    /// 必须配合短路终结操作（如`take_while`限界后求和）使用。
    pub(crate) fn generate(seed: T, mut succ: impl FnMut(&T) -> T + 'static) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(successors(Some(seed), move |prev| Some(succ(prev))).map(Ok)) }
    }
}

impl<T: 'static> LazyPipe<T> {
    pub(crate) fn map<U: 'static>(self, mut f: impl FnMut(T) -> U + 'static) -> LazyPipe<U> {
        LazyPipe { iter: Box::new(self.iter.map(move |res| res.map(&mut f))) }
    }

    pub(crate) fn try_map<U: 'static>(self, mut f: impl FnMut(T) -> SqRes<U> + 'static) -> LazyPipe<U> {
        LazyPipe { iter: Box::new(self.iter.map(move |res| res.and_then(&mut f))) }
    }

    pub(crate) fn filter(self, mut f: impl FnMut(&T) -> bool + 'static) -> LazyPipe<T> {
        // 在途错误不经过谓词，无条件放行以到达终结操作
        LazyPipe { iter: Box::new(self.iter.filter(move |res| res.as_ref().map_or(true, &mut f))) }
    }

    pub(crate) fn flat_map<U: 'static, I>(self, mut f: impl FnMut(T) -> I + 'static) -> LazyPipe<U>
    where
        I: IntoIterator<Item = U>,
        I::IntoIter: 'static,
    {
        LazyPipe {
            iter: Box::new(self.iter.flat_map(move |res| -> Box<dyn Iterator<Item = SqRes<U>>> {
                match res {
                    Ok(value) => Box::new(f(value).into_iter().map(Ok)),
                    Err(err) => Box::new(once(Err(err))),
                }
            })),
        }
    }

    pub(crate) fn inspect(self, mut f: impl FnMut(&T) + 'static) -> LazyPipe<T> {
        LazyPipe {
            iter: Box::new(self.iter.inspect(move |res| {
                if let Ok(value) = res {
                    f(value)
                }
            })),
        }
    }

    pub(crate) fn take_while(self, mut f: impl FnMut(&T) -> bool + 'static) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(self.iter.take_while(move |res| res.as_ref().map_or(true, &mut f))) }
    }

    pub(crate) fn skip_while(self, mut f: impl FnMut(&T) -> bool + 'static) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(self.iter.skip_while(move |res| res.as_ref().map_or(false, &mut f))) }
    }

    pub(crate) fn take(self, count: usize) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(self.iter.take(count)) }
    }

    pub(crate) fn skip(self, count: usize) -> LazyPipe<T> {
        LazyPipe { iter: Box::new(self.iter.skip(count)) }
    }

    /// 保序去重，首次出现者保留。
    pub(crate) fn uniq(self) -> LazyPipe<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = FxHashSet::default();
        self.filter(move |value| seen.insert(value.clone()))
    }

    /// 排序是全序列操作，此阶段在内部物化，不适用于无界源。
    pub(crate) fn sorted_by_key<K: Ord>(self, key: impl FnMut(&T) -> K) -> LazyPipe<T> {
        match self.iter.collect::<SqRes<Vec<T>>>() {
            Ok(items) => LazyPipe { iter: Box::new(items.into_iter().sorted_by_key(key).map(Ok)) },
            Err(err) => LazyPipe { iter: Box::new(once(Err(err))) },
        }
    }
}

impl<T> LazyPipe<T> {
    pub(crate) fn to_vec(&mut self) -> SqRes<Vec<T>> {
        self.iter.by_ref().collect()
    }

    /// 命中即停止拉取源元素，命中之后的元素不会进入任何阶段。
    pub(crate) fn find(&mut self, mut f: impl FnMut(&T) -> bool) -> SqRes<Option<T>> {
        for res in self.iter.by_ref() {
            let value = res?;
            if f(&value) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    pub(crate) fn first(&mut self) -> SqRes<Option<T>> {
        self.iter.next().transpose()
    }

    pub(crate) fn count(&mut self) -> SqRes<usize> {
        process_results(self.iter.by_ref(), |iter| iter.count())
    }

    pub(crate) fn sum<S: Sum<T>>(&mut self) -> SqRes<S> {
        process_results(self.iter.by_ref(), |iter| iter.sum())
    }

    /// 空输入得到`Ok(None)`；同键值并列时保留源顺序中的第一个。
    pub(crate) fn max_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K) -> SqRes<Option<T>> {
        process_results(self.iter.by_ref(), |iter| {
            iter.map(|value| (key(&value), value))
                .reduce(|best, cur| if cur.0 > best.0 { cur } else { best })
                .map(|(_, value)| value)
        })
    }

    /// 空输入得到`Ok(None)`；同键值并列时保留源顺序中的第一个。
    pub(crate) fn min_by_key<K: Ord>(&mut self, mut key: impl FnMut(&T) -> K) -> SqRes<Option<T>> {
        process_results(self.iter.by_ref(), |iter| {
            iter.map(|value| (key(&value), value))
                .reduce(|best, cur| if cur.0 < best.0 { cur } else { best })
                .map(|(_, value)| value)
        })
    }

    pub(crate) fn all(&mut self, mut f: impl FnMut(&T) -> bool) -> SqRes<bool> {
        process_results(self.iter.by_ref(), |mut iter| iter.all(|value| f(&value)))
    }

    pub(crate) fn any(&mut self, mut f: impl FnMut(&T) -> bool) -> SqRes<bool> {
        process_results(self.iter.by_ref(), |mut iter| iter.any(|value| f(&value)))
    }

    /// 按键分组，组内保持源顺序。
    pub(crate) fn group_by<K>(&mut self, mut key: impl FnMut(&T) -> K) -> SqRes<FxHashMap<K, Vec<T>>>
    where
        K: Eq + Hash,
    {
        let mut groups: FxHashMap<K, Vec<T>> = FxHashMap::default();
        for res in self.iter.by_ref() {
            let value = res?;
            groups.entry(key(&value)).or_default().push(value);
        }
        Ok(groups)
    }

    pub(crate) fn join_with(&mut self, style: &JoinStyle) -> SqRes<String>
    where
        T: Display,
    {
        process_results(self.iter.by_ref(), |mut iter| {
            format!("{}{}{}", style.prefix, iter.join(&style.delimiter), style.postfix)
        })
    }
}
