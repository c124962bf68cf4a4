use crate::demo::person::{Person, sample_people};
use crate::err::SqErr;
use crate::pipe::JoinStyle;
use crate::pipe::eager::EagerPipe;
use crate::pipe::lazy::LazyPipe;
use crate::{Float, Integer, SqRes, println_err, println_info};
use demo_help::DemoHelp;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub(crate) mod person;

#[derive(Debug, Clone, Copy, PartialEq, Eq, DemoHelp)]
pub(crate) enum Scenario {
    /// people      人员数据集：成员引用作为函数值、按键取最值、过滤映射与拼接。
    People,
    /// numbers     数字集合：保序去重、筛选偶数、平方映射。
    Numbers,
    /// grouping    分组：按年龄分组人员、按首字符分组字符串，组内保持源顺序。
    Grouping,
    /// books       展开：flat_map 摊平作者列表与字符序列，保序去重。
    Books,
    /// trace       求值顺序：同一条 map/filter 流水线在急切与惰性模式下的副作用轨迹。
    Trace,
    /// find        短路查找：惰性模式命中即停，急切模式先算完所有阶段。
    Find,
    /// naturals    生成序列：无界自然数源经 take_while 限界后求和。
    Naturals,
    /// sorted      排序：同一批文本分别按字典序与数值大小排序。
    Sorted,
    /// parse       失败传播：某个元素解析失败即中止整条流水线，无部分结果。
    Parse,
}

impl Scenario {
    /// 固定的演示顺序。
    pub(crate) fn all() -> Vec<Scenario> {
        vec![
            Scenario::People,
            Scenario::Numbers,
            Scenario::Grouping,
            Scenario::Books,
            Scenario::Trace,
            Scenario::Find,
            Scenario::Naturals,
            Scenario::Sorted,
            Scenario::Parse,
        ]
    }

    pub(crate) fn run(&self) {
        println_info!("==== {self:?} ====");
        match self {
            Scenario::People => run_people(),
            Scenario::Numbers => run_numbers(),
            Scenario::Grouping => run_grouping(),
            Scenario::Books => run_books(),
            Scenario::Trace => run_trace(),
            Scenario::Find => run_find(),
            Scenario::Naturals => run_naturals(),
            Scenario::Sorted => run_sorted(),
            Scenario::Parse => run_parse(),
        }
    }
}

fn show<T: Debug>(label: &str, res: SqRes<T>) {
    match res {
        Ok(value) => println!("{label}: {value:?}"),
        Err(err) => println_err!("{label}: {err}"),
    }
}

fn run_people() {
    fn can_be_in_club27(person: &Person) -> bool {
        person.age <= 27
    }
    let people = sample_people();
    show("youngest", EagerPipe::of(people.clone()).min_by_key(Person::age));
    show("oldest", EagerPipe::of(people.clone()).max_by_key(Person::age));
    show("adults", EagerPipe::of(people.clone()).filter(Person::is_adult).count());
    show("under 30", EagerPipe::of(people.clone()).filter(|p| p.age < 30).to_vec());
    show("names of 30+", EagerPipe::of(people.clone()).filter(|p| p.age > 30).map(|p| p.name).to_vec());
    show("all can be in club27", EagerPipe::of(people.clone()).all(can_be_in_club27));
    show("any can be in club27", EagerPipe::of(people.clone()).any(can_be_in_club27));
    show("club27 candidates", EagerPipe::of(people.clone()).filter(can_be_in_club27).count());
    show("first club27 candidate", EagerPipe::of(people.clone()).find(can_be_in_club27));
    show("names", EagerPipe::of(people).map(|p| p.name).join_with(&JoinStyle::sep(", ")));
}

fn run_numbers() {
    let numbers: Vec<Integer> = vec![1, 2, 2, 3, 3, 4, 5, 6, 7, 8];
    show("distinct", EagerPipe::of(numbers.clone()).uniq().to_vec());
    show("distinct evens", EagerPipe::of(numbers.clone()).uniq().filter(|x| x % 2 == 0).to_vec());
    show("squares", EagerPipe::of(numbers).uniq().map(|x| x * x).to_vec());
}

fn run_grouping() {
    show("people by age", EagerPipe::of(sample_people()).group_by(Person::age));
    let words = vec!["a".to_string(), "ab".to_string(), "b".to_string()];
    // 演示数据均为非空字符串
    show("words by first char", EagerPipe::of(words).group_by(|s| s.chars().next().unwrap()));
}

fn run_books() {
    let books = vec![
        ("The Legend of Sleepy Hollow", vec!["Washington Irving"]),
        ("Monday Begins on a Saturday", vec!["Boris Strugatsky", "Arkady Strugatsky"]),
        ("Mort", vec!["Terry Pratchett"]),
    ];
    show("authors", EagerPipe::of(books).flat_map(|(_, authors)| authors).uniq().to_vec());
    let strings = vec!["abc", "def"];
    show("chars", EagerPipe::of(strings).flat_map(|s| s.chars().collect::<Vec<_>>()).to_vec());
}

fn run_trace() {
    println!("eager:");
    let eager = EagerPipe::of(vec![1, 2, 3, 4])
        .map(|x: Integer| {
            print!("map({x}) ");
            x * x
        })
        .filter(|x| {
            print!("filter({x}) ");
            x % 2 == 0
        });
    println!();
    show("even squares", eager.to_vec());

    println!("lazy:");
    let mut lazy = LazyPipe::of(vec![1, 2, 3, 4])
        .map(|x: Integer| {
            print!("map({x}) ");
            x * x
        })
        .filter(|x| {
            print!("filter({x}) ");
            x % 2 == 0
        });
    let evens = lazy.to_vec();
    println!();
    show("even squares", evens);
}

fn run_find() {
    println!("lazy:");
    let mut lazy = LazyPipe::of(vec![1, 2, 3, 4]).map(|x: Integer| {
        print!("map({x}) ");
        x * x
    });
    let found = lazy.find(|x| *x > 3);
    println!();
    show("first square > 3", found);

    println!("eager:");
    let eager = EagerPipe::of(vec![1, 2, 3, 4]).map(|x: Integer| {
        print!("map({x}) ");
        x * x
    });
    println!();
    show("first square > 3", eager.find(|x| *x > 3));
}

fn run_naturals() {
    let seed: Integer = 0;
    show("sum of naturals to 100", LazyPipe::generate(seed, |x| x + 1).take_while(|x| *x <= 100).sum::<Integer>());
}

fn run_sorted() {
    let texts = vec!["10.5", "2", "33", "4.25"];
    show("lexical", EagerPipe::of(texts.clone()).sorted_by_key(|s| s.to_string()).to_vec());
    // 无法解析的文本按浮点最大值处理
    show(
        "numeric",
        EagerPipe::of(texts).sorted_by_key(|s| OrderedFloat(s.parse::<Float>().unwrap_or(Float::MAX))).to_vec(),
    );
}

fn run_parse() {
    show(
        "sum",
        LazyPipe::of(vec!["1", "2", "x", "4"])
            .try_map(|s| {
                s.parse::<Integer>()
                    .map_err(|err| SqErr::StageFailed { op: "parse", element: s.to_string(), reason: err.to_string() })
            })
            .sum::<Integer>(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_every_scenario() {
        for scenario in Scenario::all() {
            let name = format!("{scenario:?}").to_ascii_lowercase();
            assert_eq!(Some(scenario), Scenario::from_name(&name));
        }
        assert_eq!(Some(Scenario::People), Scenario::from_name("PEOPLE"));
        assert_eq!(None, Scenario::from_name("nope"));
    }

    #[test]
    fn test_all_scenarios_have_aligned_help() {
        assert_eq!(Scenario::all().len(), Scenario::all_help().len());
        for (name, help) in Scenario::all_help() {
            assert_eq!(Some(*name), help.split_whitespace().next());
        }
    }
}
