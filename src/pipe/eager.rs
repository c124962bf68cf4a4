use crate::SqRes;
use crate::pipe::JoinStyle;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

/// 急切流水线：每个阶段对全部元素物化一个新容器之后，下一阶段才开始，
/// 阶段内的副作用因此先于下一阶段的任何元素发生。
///
/// 某个阶段一旦失败，错误被持有，其后的阶段全部跳过，
/// 任何终结操作都返回该错误，不产生部分结果。
///
/// 元素容器持久持有：终结操作可重复调用，且每次结果一致。
pub(crate) struct EagerPipe<T> {
    items: SqRes<Vec<T>>,
}

impl<T> EagerPipe<T> {
    pub(crate) fn of(items: Vec<T>) -> EagerPipe<T> {
        EagerPipe { items: Ok(items) }
    }

    pub(crate) fn map<U>(self, f: impl FnMut(T) -> U) -> EagerPipe<U> {
        EagerPipe { items: self.items.map(|items| items.into_iter().map(f).collect()) }
    }

    pub(crate) fn try_map<U>(self, f: impl FnMut(T) -> SqRes<U>) -> EagerPipe<U> {
        EagerPipe { items: self.items.and_then(|items| items.into_iter().map(f).collect()) }
    }

    pub(crate) fn filter(self, mut f: impl FnMut(&T) -> bool) -> EagerPipe<T> {
        EagerPipe { items: self.items.map(|items| items.into_iter().filter(|value| f(value)).collect()) }
    }

    pub(crate) fn flat_map<U, I>(self, f: impl FnMut(T) -> I) -> EagerPipe<U>
    where
        I: IntoIterator<Item = U>,
    {
        EagerPipe { items: self.items.map(|items| items.into_iter().flat_map(f).collect()) }
    }

    pub(crate) fn inspect(self, mut f: impl FnMut(&T)) -> EagerPipe<T> {
        EagerPipe {
            items: self.items.map(|items| {
                items.iter().for_each(&mut f);
                items
            }),
        }
    }

    pub(crate) fn take_while(self, mut f: impl FnMut(&T) -> bool) -> EagerPipe<T> {
        EagerPipe { items: self.items.map(|items| items.into_iter().take_while(|value| f(value)).collect()) }
    }

    pub(crate) fn skip_while(self, mut f: impl FnMut(&T) -> bool) -> EagerPipe<T> {
        EagerPipe { items: self.items.map(|items| items.into_iter().skip_while(|value| f(value)).collect()) }
    }

    pub(crate) fn take(self, count: usize) -> EagerPipe<T> {
        EagerPipe { items: self.items.map(|items| items.into_iter().take(count).collect()) }
    }

    pub(crate) fn skip(self, count: usize) -> EagerPipe<T> {
        EagerPipe { items: self.items.map(|items| items.into_iter().skip(count).collect()) }
    }

    /// 保序去重，首次出现者保留。
    pub(crate) fn uniq(self) -> EagerPipe<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = FxHashSet::default();
        self.filter(move |value| seen.insert(value.clone()))
    }

    pub(crate) fn sorted_by_key<K: Ord>(self, key: impl FnMut(&T) -> K) -> EagerPipe<T> {
        EagerPipe { items: self.items.map(|items| items.into_iter().sorted_by_key(key).collect()) }
    }
}

impl<T> EagerPipe<T> {
    pub(crate) fn to_vec(&self) -> SqRes<Vec<T>>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub(crate) fn find(&self, mut f: impl FnMut(&T) -> bool) -> SqRes<Option<T>>
    where
        T: Clone,
    {
        match &self.items {
            Ok(items) => Ok(items.iter().find(|value| f(value)).cloned()),
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn first(&self) -> SqRes<Option<T>>
    where
        T: Clone,
    {
        match &self.items {
            Ok(items) => Ok(items.first().cloned()),
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn count(&self) -> SqRes<usize> {
        match &self.items {
            Ok(items) => Ok(items.len()),
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn sum<S: Sum<T>>(&self) -> SqRes<S>
    where
        T: Clone,
    {
        match &self.items {
            Ok(items) => Ok(items.iter().cloned().sum()),
            Err(err) => Err(err.clone()),
        }
    }

    /// 空输入得到`Ok(None)`；同键值并列时保留源顺序中的第一个。
    pub(crate) fn max_by_key<K: Ord>(&self, mut key: impl FnMut(&T) -> K) -> SqRes<Option<T>>
    where
        T: Clone,
    {
        match &self.items {
            Ok(items) => Ok(items
                .iter()
                .map(|value| (key(value), value))
                .reduce(|best, cur| if cur.0 > best.0 { cur } else { best })
                .map(|(_, value)| value.clone())),
            Err(err) => Err(err.clone()),
        }
    }

    /// 空输入得到`Ok(None)`；同键值并列时保留源顺序中的第一个。
    pub(crate) fn min_by_key<K: Ord>(&self, mut key: impl FnMut(&T) -> K) -> SqRes<Option<T>>
    where
        T: Clone,
    {
        match &self.items {
            Ok(items) => Ok(items
                .iter()
                .map(|value| (key(value), value))
                .reduce(|best, cur| if cur.0 < best.0 { cur } else { best })
                .map(|(_, value)| value.clone())),
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn all(&self, mut f: impl FnMut(&T) -> bool) -> SqRes<bool> {
        match &self.items {
            Ok(items) => Ok(items.iter().all(|value| f(value))),
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn any(&self, mut f: impl FnMut(&T) -> bool) -> SqRes<bool> {
        match &self.items {
            Ok(items) => Ok(items.iter().any(|value| f(value))),
            Err(err) => Err(err.clone()),
        }
    }

    /// 按键分组，组内保持源顺序。
    pub(crate) fn group_by<K>(&self, mut key: impl FnMut(&T) -> K) -> SqRes<FxHashMap<K, Vec<T>>>
    where
        K: Eq + Hash,
        T: Clone,
    {
        match &self.items {
            Ok(items) => {
                let mut groups: FxHashMap<K, Vec<T>> = FxHashMap::default();
                for value in items {
                    groups.entry(key(value)).or_default().push(value.clone());
                }
                Ok(groups)
            }
            Err(err) => Err(err.clone()),
        }
    }

    pub(crate) fn join_with(&self, style: &JoinStyle) -> SqRes<String>
    where
        T: Display,
    {
        match &self.items {
            Ok(items) => {
                Ok(format!("{}{}{}", style.prefix, items.iter().join(&style.delimiter), style.postfix))
            }
            Err(err) => Err(err.clone()),
        }
    }
}
