//! The example-program catalog.
//!
//! An ordered, immutable list of named Aspen programs. The playground reads
//! the full list to populate its picker and replaces the editor buffer
//! wholesale when an entry is selected. Extra entries can be appended from
//! the config file; the built-ins always come first, in this order.

use serde::{Deserialize, Serialize};

/// A named example program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleEntry {
    /// Display name shown in the picker.
    pub name: String,
    /// Full program source.
    pub code: String,
}

impl ExampleEntry {
    fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}

/// Returns the built-in catalog.
pub fn builtin_catalog() -> Vec<ExampleEntry> {
    vec![
        ExampleEntry::new("Hello, World!", "print \"Hello, 世界!\";"),
        ExampleEntry::new(
            "Recursion",
            r#"fn factorial(n i64) i64 {
    if (n <= 1) {
        return 1;
    }
    return n * factorial(n - 1);
}

for (let i i64 = 0; i <= 10; i = i + 1) {
    print itoa(i) + "! = " + itoa(factorial(i));
}
"#,
        ),
        ExampleEntry::new(
            "Fibonacci",
            r"let a i64 = 0;
let b i64 = 1;

while (a < 10000) {
    print a;
    let temp i64 = a;
    a = a + b;
    b = temp;
}
",
        ),
        ExampleEntry::new(
            "Closures",
            r"fn makeCounter() fn()void {
    let i i64 = 0;
    fn count() void {
        i = i + 1;
        print i;
    }
    return count;
}

let counter fn()void = makeCounter();
counter();
counter();
counter();
",
        ),
        ExampleEntry::new(
            "First Class Functions",
            r"fn list(generator fn(i64)i64, n i64) void {
    for (let i i64 = 0; i <= n; i = i + 1) {
        print generator(i);
    }
}

fn square(n i64) i64 {
    return n * n;
}

list(square, 10);
",
        ),
        ExampleEntry::new(
            "Fizzbuzz",
            r#"for (let i i64 = 1; i < 100; i = i + 1) {
    if (i % 15 == 0) {
        print "fizzbuzz";
    } else if (i % 3 == 0) {
        print "fizz";
    } else if (i % 5 == 0) {
        print "buzz";
    } else {
        print i;
    }
}
"#,
        ),
    ]
}

/// Returns the full catalog: built-ins followed by config-supplied entries.
pub fn catalog_with_extras(extras: &[ExampleEntry]) -> Vec<ExampleEntry> {
    let mut catalog = builtin_catalog();
    catalog.extend(extras.iter().cloned());
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_ordered_and_nonempty() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].name, "Hello, World!");
        assert_eq!(catalog[0].code, "print \"Hello, 世界!\";");
        assert_eq!(catalog[5].name, "Fizzbuzz");
    }

    #[test]
    fn extras_are_appended_after_builtins() {
        let extras = vec![ExampleEntry::new("Scratch", "print 1;")];
        let catalog = catalog_with_extras(&extras);
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog[6].name, "Scratch");
        // Built-in order is untouched.
        assert_eq!(catalog[0].name, "Hello, World!");
    }
}
