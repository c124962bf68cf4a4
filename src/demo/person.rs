use crate::Integer;

/// 演示数据集中的人员。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Person {
    pub(crate) name: String,
    pub(crate) age: Integer,
}

impl Person {
    pub(crate) fn new(name: &str, age: Integer) -> Person {
        Person { name: name.to_string(), age }
    }

    /// 年龄访问器，作为函数值传给键选择与比较类操作。
    pub(crate) fn age(&self) -> Integer {
        self.age
    }

    /// 成年判定，作为函数值传给谓词类操作。
    pub(crate) fn is_adult(&self) -> bool {
        self.age >= 21
    }
}

pub(crate) fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Alice", 25),
        Person::new("Bob", 31),
        Person::new("Mark", 20),
        Person::new("Carol", 31),
        Person::new("Armen", 55),
        Person::new("Dan", 21),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::lazy::LazyPipe;

    #[test]
    fn test_member_references_as_function_values() {
        assert_eq!(Ok(Some(Person::new("Armen", 55))), LazyPipe::of(sample_people()).max_by_key(Person::age));
        assert_eq!(Ok(Some(Person::new("Mark", 20))), LazyPipe::of(sample_people()).min_by_key(Person::age));
        assert_eq!(Ok(5), LazyPipe::of(sample_people()).filter(Person::is_adult).count());
    }
}
