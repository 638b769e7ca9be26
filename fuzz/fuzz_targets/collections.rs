#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use indexed_collections::{
    ArrayIndexedCollection, Collection, LinkedListIndexedCollection, ObjectStack,
};

#[derive(Arbitrary, Debug)]
enum Action {
    Add(Option<String>),
    Insert(String, usize),
    RemoveAt(usize),
    RemoveValue(String),
    Get(usize),
    Push(String),
    Pop,
    Clear,
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let capacity = input.0 as usize;
    let mut array: ArrayIndexedCollection<String> = match ArrayIndexedCollection::with_capacity(capacity) {
        Ok(array) => array,
        Err(_) => {
            assert_eq!(0, capacity);
            ArrayIndexedCollection::new()
        }
    };
    let mut list: LinkedListIndexedCollection<String> = LinkedListIndexedCollection::new();
    let mut stack: ObjectStack<String> = ObjectStack::new();
    let mut model: Vec<String> = Vec::new();
    let mut stack_model: Vec<String> = Vec::new();
    for action in input.1 {
        match action {
            Add(value) => {
                let expected = value.is_some();
                if let Some(value) = &value {
                    model.push(value.clone());
                }
                assert_eq!(expected, array.add(value.clone()).is_ok());
                assert_eq!(expected, list.add(value).is_ok());
            }
            Insert(value, position) => {
                let position = position % (model.len() + 2);
                let expected = position <= model.len();
                if expected {
                    model.insert(position, value.clone());
                }
                assert_eq!(expected, array.insert(value.clone(), position).is_ok());
                assert_eq!(expected, list.insert(value, position).is_ok());
            }
            RemoveAt(index) => {
                let index = index % (model.len() + 1);
                let expected = if index < model.len() {
                    Some(model.remove(index))
                } else {
                    None
                };
                assert_eq!(expected, array.remove_at(index).ok());
                assert_eq!(expected, list.remove_at(index).ok());
            }
            RemoveValue(value) => {
                let found = model.iter().position(|element| *element == value);
                if let Some(index) = found {
                    model.remove(index);
                }
                assert_eq!(found.is_some(), array.remove(&value));
                assert_eq!(found.is_some(), list.remove(&value));
            }
            Get(index) => {
                assert_eq!(model.get(index), array.get(index).ok());
                assert_eq!(model.get(index), list.get(index).ok());
            }
            Push(value) => {
                stack_model.push(value.clone());
                stack.push(value).unwrap();
            }
            Pop => {
                assert_eq!(stack_model.pop(), stack.pop().ok());
            }
            Clear => {
                model.clear();
                array.clear();
                list.clear();
            }
        }
        assert_eq!(model.len(), array.size());
        assert_eq!(model.len(), list.size());
        assert_eq!(stack_model.len(), stack.size());
    }
    assert_eq!(model, array.to_array());
    assert_eq!(model, list.to_array());
    assert!(list.iter().rev().eq(model.iter().rev()));
});
