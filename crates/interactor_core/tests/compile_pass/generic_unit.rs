use interactor_core::prelude::*;
use interactor_core::validation::FieldValue;

#[derive(Lifecycle, Validate)]
struct Window<T: FieldValue + Copy> {
    #[validate(gte = 1)]
    size: T,
    #[hooks(before = "widen")]
    execute_hooks: ExecuteHooks,
    widened: bool,
}

impl<T: FieldValue + Copy> Window<T> {
    fn widen(&mut self) {
        self.widened = true;
    }
}

impl<T: FieldValue + Copy> Interaction for Window<T> {
    type Output = bool;

    fn run(&mut self) -> InteractionResult<bool> {
        Ok(self.widened)
    }
}

/// Derives must honor the unit's generics and bounds.
fn main() {
    let mut window = Window {
        size: 3_u16,
        execute_hooks: ExecuteHooks,
        widened: false,
    };
    assert_eq!(execute(&mut window), Ok(true));

    let mut narrow = Window {
        size: 0.5_f32,
        execute_hooks: ExecuteHooks,
        widened: false,
    };
    assert!(execute(&mut narrow).is_err());
}
