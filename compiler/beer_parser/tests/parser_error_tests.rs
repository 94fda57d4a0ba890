use beer_lexer::Lexer;
use beer_parser::parse;
use pretty_assertions::assert_eq;

fn report(name: &str, source: &str) -> String {
    let tokens = Lexer::new(name, source).tokenize().unwrap();
    parse(&tokens).unwrap_err().report()
}

#[test]
fn test_report_at_end_of_input() {
    assert_eq!(
        report("calc.beer", "10 * (3 -"),
        "Illegal Syntax: expected a number\nFile: calc.beer, line 1\n10 * (3 -\n         ^"
    );
}

#[test]
fn test_report_underlines_whole_number() {
    assert_eq!(
        report("<stdin>", "1 + 2 345.25"),
        "Illegal Syntax: expected '+', '-', '*' or '/'\nFile: <stdin>, line 1\n1 + 2 345.25\n      ^^^^^^"
    );
}

#[test]
fn test_report_keeps_tabs() {
    assert_eq!(
        report("<stdin>", "\t( 1"),
        "Illegal Syntax: expected ')'\nFile: <stdin>, line 1\n\t( 1\n\t   ^"
    );
}
