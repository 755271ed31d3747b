use interactor_core::prelude::*;

#[derive(Lifecycle, Validate)]
struct Lookup {
    #[validate(required, alphanum)]
    key: String,
}

impl Interaction for Lookup {
    type Output = usize;

    fn run(&mut self) -> InteractionResult<usize> {
        Ok(self.key.len())
    }
}

#[derive(Lifecycle, Validate)]
struct Batch {
    #[validate(min = 1)]
    keys: Vec<String>,
    #[hooks(after = "dedupe")]
    validate_hooks: ValidateHooks,
}

impl Batch {
    fn dedupe(&mut self) {
        self.keys.sort();
        self.keys.dedup();
    }
}

impl Interaction for Batch {
    type Output = Vec<usize>;

    fn run(&mut self) -> InteractionResult<Vec<usize>> {
        self.keys
            .iter()
            .map(|key| compose(&mut Lookup { key: key.clone() }))
            .collect()
    }
}

/// Composed units propagate failures through `?` or `collect`.
fn main() {
    let mut batch = Batch {
        keys: vec!["b2".to_string(), "a".to_string(), "b2".to_string()],
        validate_hooks: ValidateHooks,
    };
    assert_eq!(execute(&mut batch), Ok(vec![1, 2]));

    let mut broken = Batch {
        keys: vec!["ok".to_string(), "not ok".to_string()],
        validate_hooks: ValidateHooks,
    };
    let err = execute(&mut broken).unwrap_err();
    assert!(err.error_map().is_some_and(|map| map.contains("key")));
}
