use quote::{format_ident, quote};

/// Expands to one `#[test]` per `.lox` file found (recursively) in the given
/// directory, relative to `bin/tests`. Every test hands the file contents to a
/// `lox_expect(&str)` function that has to be in scope at the call site.
#[proc_macro]
pub fn generate_tests(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let dir = syn::parse_macro_input!(input as syn::LitStr).value();
    let root_dir = format!("{}/../{dir}", env!("CARGO_MANIFEST_DIR"));

    let mut entries = walkdir::WalkDir::new(&root_dir)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("lox".as_ref()))
        .peekable();

    if entries.peek().is_none() {
        let message = format!("no .lox files found in {root_dir}");
        return quote! { compile_error!(#message); }.into();
    }

    let tests = entries.map(|entry| {
        let test_file_path = entry.path().to_string_lossy().to_string();
        let relative_test_path = entry.path().strip_prefix(&root_dir).unwrap().with_extension("");
        let test_name = relative_test_path
            .to_string_lossy()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect::<String>();
        let test_ident = format_ident!("{}_{}", dir, test_name);
        quote! {
            #[test]
            fn #test_ident() {
                lox_expect(std::fs::read_to_string(#test_file_path).unwrap().as_str());
            }
        }
    });

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
