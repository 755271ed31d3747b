use interactor_core::prelude::*;
use interactor_core::{Hook, HookDecl, Phase};

#[derive(Validate)]
struct Counter {
    #[validate(lte = 10)]
    value: u32,
}

impl Counter {
    fn bump(&mut self) {
        self.value += 1;
    }
}

/// A unit may declare its hooks by hand instead of deriving them.
impl Lifecycle for Counter {
    fn hook_decls() -> &'static [HookDecl] {
        const DECLS: &[HookDecl] = &[HookDecl::new(Phase::Execute, "bump|bump", "")];
        DECLS
    }

    fn hook(name: &str) -> Option<Hook<Self>> {
        match name {
            "bump" => Some(Self::bump as Hook<Self>),
            _ => None,
        }
    }
}

impl Interaction for Counter {
    type Output = u32;

    fn run(&mut self) -> InteractionResult<u32> {
        Ok(self.value)
    }
}

fn main() {
    assert_eq!(execute(&mut Counter { value: 1 }), Ok(3));
}
