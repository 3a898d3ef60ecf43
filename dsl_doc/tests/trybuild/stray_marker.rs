use dsl_doc::dsl_method_doc;

#[dsl_method_doc(plugin = "git")]
fn git(url: &str) -> usize {
    url.len()
}

fn main() {
    let _ = git("https://example.com/repo.git");
}
