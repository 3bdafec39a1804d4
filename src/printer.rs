use std::fmt::Display;
use std::io::{self, Write};

/// Renders `v` as one line of space separated values, terminated by `\n`.
///
/// An empty slice renders as a lone line terminator.
pub fn render<T: Display>(v: &[T]) -> String {
    let mut line = v
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    line.push('\n');

    line
}

/// Writes the output of [`render`] to `writer`.
pub fn write_line<W, T>(mut writer: W, v: &[T]) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    writer.write_all(render(v).as_bytes())
}
