use serde::Serialize;

/// One recorded inventory entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    category: String,
    quantity: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_values() {
        let item = Item::new("Hammer", String::from("Tools"), 10);
        assert_eq!(item.name(), "Hammer");
        assert_eq!(item.category(), "Tools");
        assert_eq!(item.quantity(), 10);
    }
}
