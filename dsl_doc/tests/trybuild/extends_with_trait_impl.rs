#![allow(dead_code)]

use dsl_doc::dsl_methods;

trait ScmContext {
    fn git(&mut self);
}

struct GitScm;

#[dsl_methods(extends = "ScmContext")]
impl ScmContext for GitScm {
    fn git(&mut self) {}
}

fn main() {}
