use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// A map holding at most one value per type.
#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|x| x.downcast_ref())
    }

    pub fn insert<T: 'static>(&mut self, x: T) -> Option<T> {
        self.0
            .insert(TypeId::of::<T>(), Box::new(x))
            .and_then(|old| old.downcast().ok())
            .map(|old| *old)
    }
}
