use crate::lang::Lang;

pub const JS: &str = r#"
function add(a, b) {
    return a + b;
}

const result = add(5, 10);
console.log("Result:", result);
"#;

pub const PYTHON: &str = r#"
def calculate_fibonacci(n):
    if n <= 1:
        return n
    return calculate_fibonacci(n-1) + calculate_fibonacci(n-2)

result = calculate_fibonacci(10)
print(f"Fibonacci of 10: {result}")
"#;

pub const JAVA: &str = r#"
public class Calculator {
    public static int add(int a, int b) {
        return a + b;
    }

    public static void main(String[] args) {
        int result = add(5, 10);
        System.out.println("Result: " + result);
    }
}
"#;

/// a named snippet: an identifier, an informal language tag and the
/// verbatim payload. the payload is never parsed or executed.
#[derive(Debug, Clone, Copy)]
pub struct TextBlock {
    pub name: &'static str,
    pub lang: Lang,
    pub body: &'static str,
}

pub fn blocks() -> [TextBlock; 3] {
    [
        Lang::Javascript.get_block(),
        Lang::Python.get_block(),
        Lang::Java.get_block(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_blank_lines(s: &str) -> Vec<&str> {
        s.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    #[test]
    fn js_block_framing() {
        let lines = non_blank_lines(JS);
        assert_eq!(lines.first(), Some(&"function add(a, b) {"));
        assert_eq!(lines.last(), Some(&r#"console.log("Result:", result);"#));
    }

    #[test]
    fn python_block_contains_fibonacci() {
        assert!(PYTHON.contains("def calculate_fibonacci(n):"));
    }

    #[test]
    fn java_block_contains_calculator() {
        assert!(JAVA.contains("public class Calculator"));
    }

    #[test]
    fn payloads_are_pairwise_distinct() {
        assert_ne!(JS, PYTHON);
        assert_ne!(JS, JAVA);
        assert_ne!(PYTHON, JAVA);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let first = Lang::Python.get_snippet();
        let second = Lang::Python.get_snippet();
        assert_eq!(first, second);
        assert_eq!(second, PYTHON);
    }

    #[test]
    fn block_names_are_unique() {
        let all = blocks();
        assert_eq!(all.len(), 3);
        assert_ne!(all[0].name, all[1].name);
        assert_ne!(all[0].name, all[2].name);
        assert_ne!(all[1].name, all[2].name);
    }
}
