//! Generator synthesis for container types.

use std::rc::Rc;

use proptest::prelude::*;
use proptest::strategy::Union;
use tracing::{debug, trace};

use lawful_types::{
    Construction, ContainerDescriptor, Drawn, LawfulError, LawfulResult, Lifting, RawConstructor,
    Ty,
};

use crate::registry::{GeneratorFactory, TypeRegistry};

/// One way of building values of a container.
#[derive(Debug, Clone)]
enum Ingredient {
    Raw(RawConstructor),
    Lift(Construction, Lifting),
}

impl Ingredient {
    fn construction(&self) -> Construction {
        match self {
            Ingredient::Raw(_) => Construction::Raw,
            Ingredient::Lift(construction, _) => *construction,
        }
    }

    fn strategy(
        &self,
        type_name: &'static str,
        registry: &TypeRegistry,
    ) -> LawfulResult<BoxedStrategy<Drawn>> {
        match self {
            Ingredient::Raw(raw) => {
                let fields = registry.resolve_all(raw.fields())?;
                let raw = raw.clone();
                Ok(fields
                    .prop_filter_map(format!("raw constructor of {} refused", type_name), move |values| {
                        raw.build(values)
                    })
                    .boxed())
            }
            Ingredient::Lift(construction, lifting) => {
                let input = registry.resolve(lifting.input())?;
                let lifting = lifting.clone();
                Ok(input
                    .prop_filter_map(
                        format!("{:?} constructor of {} refused", construction, type_name),
                        move |drawn| lifting.build(&drawn),
                    )
                    .boxed())
            }
        }
    }
}

/// Constructions used to generate values of `descriptor`'s container.
///
/// Raw construction only participates when `use_raw` is set.
pub fn construction_plan(descriptor: &ContainerDescriptor, use_raw: bool) -> Vec<Construction> {
    ingredients(descriptor, use_raw)
        .iter()
        .map(Ingredient::construction)
        .collect()
}

fn ingredients(descriptor: &ContainerDescriptor, use_raw: bool) -> Vec<Ingredient> {
    let constructors = descriptor.constructors();
    let mut found = Vec::new();
    if use_raw {
        if let Some(raw) = &constructors.raw {
            found.push(Ingredient::Raw(raw.clone()));
        }
    }
    let lifts = [
        (Construction::FromSuccess, &constructors.from_success),
        (Construction::FromFailure, &constructors.from_failure),
        (Construction::FromOptional, &constructors.from_optional),
    ];
    for (construction, lifting) in lifts {
        if let Some(lifting) = lifting {
            found.push(Ingredient::Lift(construction, lifting.clone()));
        }
    }
    found
}

/// A factory drawing container values uniformly across the applicable
/// constructions.
///
/// Fails immediately when no construction applies, so misconfigured
/// containers are reported when their laws are set up, not when a law runs.
/// The same factory serves the container type and each of its interfaces.
pub fn container_generator(
    descriptor: &ContainerDescriptor,
    use_raw: bool,
) -> LawfulResult<GeneratorFactory> {
    let ingredients = ingredients(descriptor, use_raw);
    if ingredients.is_empty() {
        let reason = if descriptor.constructors().raw.is_some() {
            "only a raw constructor is declared and raw construction is disabled"
        } else {
            "no construction capability is declared"
        };
        return Err(LawfulError::construction(descriptor.type_name(), reason));
    }
    let type_name = descriptor.type_name();
    debug!(
        container = %descriptor.id(),
        constructions = ?ingredients.iter().map(Ingredient::construction).collect::<Vec<_>>(),
        "Container generator ready"
    );
    let ingredients = Rc::new(ingredients);
    let factory: GeneratorFactory = Rc::new(
        move |ty: &Ty, registry: &TypeRegistry| -> LawfulResult<BoxedStrategy<Drawn>> {
            trace!(ty = %ty, container = type_name, "Drawing container values");
            let options = ingredients
                .iter()
                .map(|ingredient| ingredient.strategy(type_name, registry))
                .collect::<LawfulResult<Vec<_>>>()?;
            Ok(Union::new(options).boxed())
        },
    );
    Ok(factory)
}
