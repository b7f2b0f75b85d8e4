use lawful_interfaces::{mappable, Mappable};
use lawful_types::{ContainerDescriptor, ContainerId, Lawful, Ty, Value};

pub const OPAQUE: ContainerId = ContainerId::new("Opaque");

/// A container with no lifting constructors: values only come from its
/// raw constructor, so laws need raw construction enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque {
    value: Value,
    generation: u32,
}

impl Opaque {
    pub fn new(value: Value, generation: u32) -> Self {
        Self { value, generation }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Lawful for Opaque {
    fn descriptor() -> ContainerDescriptor {
        ContainerDescriptor::builder::<Opaque>(OPAQUE)
            .implements(mappable::<Opaque>())
            .raw([Ty::var("A"), Ty::named::<u32>()], |args| {
                Ok(Opaque::new(args.next()?, args.next()?))
            })
            .build()
    }
}

impl Mappable for Opaque {
    fn map<F: Fn(Value) -> Value>(self, f: F) -> Self {
        Opaque {
            value: f(self.value),
            generation: self.generation,
        }
    }
}
