//! Indented human-readable exporter.

use super::{group_unique, Node};
use crate::figure::Figure;

const INDENT: &str = "    ";

/// Renders a figure as an indented block dump, one nesting level per
/// four spaces:
///
/// ```text
/// Figure
/// {
///     Description: Unit segment
///     Points:
///     {
///         A(0, 0)
///         B(1, 0)
///     }
///     Segments:
///     {
///         A : B
///     }
/// }
/// ```
///
/// Output is stable for a given figure and suitable for snapshot
/// comparison. Segments use the unique-edge view.
#[must_use]
pub fn to_text(figure: &Figure) -> String {
    let mut out = String::new();
    write_node(Node::Figure(figure), &mut out, 0);
    out
}

fn write_node(node: Node<'_>, out: &mut String, level: usize) {
    match node {
        Node::Figure(figure) => {
            push_line(out, level, "Figure");
            push_line(out, level, "{");
            push_line(
                out,
                level + 1,
                &format!("Description: {}", figure.description()),
            );
            push_line(out, level + 1, "Points:");
            write_node(Node::Points(figure.points()), out, level + 1);
            push_line(out, level + 1, "Segments:");
            write_node(
                Node::Segments {
                    graph: figure.segments(),
                    points: figure.points(),
                },
                out,
                level + 1,
            );
            push_line(out, level, "}");
        }
        Node::Points(registry) => {
            push_line(out, level, "{");
            for (_, point) in registry.iter() {
                write_node(Node::Point(point), out, level + 1);
            }
            push_line(out, level, "}");
        }
        Node::Segments { graph, points } => {
            push_line(out, level, "{");
            for (from, neighbors) in group_unique(graph) {
                let mut line = points
                    .point(from)
                    .map(|p| format!("{} :", p.name()))
                    .unwrap_or_default();
                for to in neighbors {
                    if let Some(p) = points.point(to) {
                        line.push(' ');
                        line.push_str(p.name());
                    }
                }
                push_line(out, level + 1, &line);
            }
            push_line(out, level, "}");
        }
        Node::Point(point) => push_line(out, level, &point.to_string()),
    }
}

fn push_line(out: &mut String, level: usize, text: &str) {
    out.push_str(&INDENT.repeat(level));
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::{parse, GeometryBuilder};

    #[test]
    fn single_segment_dump_is_exact() {
        let text = r#"
        {
            "Figure": {
                "description": "Unit segment",
                "points": [
                    {"name": "A", "x": 0, "y": 0},
                    {"name": "B", "x": 1, "y": 0}
                ],
                "segments": [{"A": ["B"]}]
            }
        }
        "#;
        let figure = parse(text, &GeometryBuilder).unwrap().unwrap();

        let expected = "\
Figure
{
    Description: Unit segment
    Points:
    {
        A(0, 0)
        B(1, 0)
    }
    Segments:
    {
        A : B
    }
}
";
        assert_eq!(to_text(&figure), expected);
    }

    #[test]
    fn each_edge_appears_on_exactly_one_line() {
        let text = r#"
        {
            "Figure": {
                "description": "Triangle",
                "points": [
                    {"name": "A", "x": 0, "y": 0},
                    {"name": "B", "x": 1, "y": 0},
                    {"name": "C", "x": 0.5, "y": 1}
                ],
                "segments": [
                    {"A": ["B", "C"]},
                    {"B": ["A", "C"]},
                    {"C": ["A", "B"]}
                ]
            }
        }
        "#;
        let figure = parse(text, &GeometryBuilder).unwrap().unwrap();
        let dump = to_text(&figure);

        // 3 undirected edges → 3 neighbor mentions across segment lines.
        let mentions: usize = dump
            .lines()
            .filter_map(|line| {
                let (_, neighbors) = line.split_once(" : ")?;
                Some(neighbors.split_whitespace().count())
            })
            .sum();
        assert_eq!(mentions, 3);
    }

    #[test]
    fn repeated_dumps_are_identical() {
        let text = r#"
        {
            "Figure": {
                "description": "Square",
                "points": [
                    {"name": "A", "x": 0, "y": 0},
                    {"name": "B", "x": 1, "y": 0},
                    {"name": "C", "x": 1, "y": 1},
                    {"name": "D", "x": 0, "y": 1}
                ],
                "segments": [
                    {"A": ["B", "D"]},
                    {"B": ["C"]},
                    {"C": ["D"]}
                ]
            }
        }
        "#;
        let figure = parse(text, &GeometryBuilder).unwrap().unwrap();
        assert_eq!(to_text(&figure), to_text(&figure));
    }

    #[test]
    fn empty_figure_renders_empty_blocks() {
        let text = r#"{"Figure": {"description": "empty", "points": [], "segments": []}}"#;
        let figure = parse(text, &GeometryBuilder).unwrap().unwrap();
        let dump = to_text(&figure);
        assert!(dump.contains("Description: empty"));
        assert!(dump.contains("Points:"));
        assert!(dump.contains("Segments:"));
    }
}
