#![allow(dead_code)]

pub mod nullable_ab;
