use std::{io, path::Path, process};

use criterion_plot::prelude::*;
use log::info;

use crate::{
    error::{Error, Result},
    stats::Series,
};

const BAND_OPACITY: f64 = 0.2;
const LINE_WIDTH: LineWidth = LineWidth(2.0);
const Y_LABEL: &str = "Time (seconds)";

fn series_color(index: usize) -> Color {
    match index % 4 {
        0 => Color::Rgb(31, 120, 180),
        1 => Color::Rgb(227, 26, 28),
        2 => Color::Rgb(51, 160, 44),
        _ => Color::Rgb(255, 127, 0),
    }
}

///Draws every series as its mean line over a shaded min..max band and renders the
/// figure to path as SVG. Needs gnuplot on the PATH
pub fn plot_comparison(path: &Path, x_label: &'static str, series: &[Series]) -> Result<()> {
    let mut figure = Figure::new();
    figure
        .set(Output(path.to_path_buf()))
        .configure(Axis::BottomX, |a| a.set(Label(x_label)))
        .configure(Axis::LeftY, |a| a.set(Label(Y_LABEL)))
        .configure(Key, |k| {
            k.set(Justification::Left)
                .set(Order::SampleText)
                .set(Position::Inside(Vertical::Top, Horizontal::Left))
        });

    for (index, line) in series.iter().enumerate() {
        let (xs, means, mins, maxes) = (line.xs(), line.means(), line.mins(), line.maxes());
        figure
            .plot(
                FilledCurve {
                    x: &*xs,
                    y1: &*mins,
                    y2: &*maxes,
                },
                |c| c.set(series_color(index)).set(Opacity(BAND_OPACITY)),
            )
            .plot(
                Lines {
                    x: &*xs,
                    y: &*means,
                },
                |c| {
                    c.set(series_color(index))
                        .set(LINE_WIDTH)
                        .set(Label(line.label.clone()))
                },
            );
    }

    check_render(
        path,
        figure
            .draw()
            .and_then(|gnuplot| gnuplot.wait_with_output()),
    )?;
    info!("saved {}", path.display());
    Ok(())
}

///Maps a failed spawn or a non-zero gnuplot exit to Error::Plot
fn check_render(path: &Path, rendered: io::Result<process::Output>) -> Result<()> {
    let output = rendered.map_err(|why| Error::Plot {
        path: path.to_path_buf(),
        reason: why.to_string(),
    })?;
    if !output.status.success() {
        return Err(Error::Plot {
            path: path.to_path_buf(),
            reason: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stats::Summary, util::testing::with_scratch_dir};

    #[test]
    fn test_spawn_failure() {
        let path = Path::new("out/add.svg");
        let missing = io::Error::new(io::ErrorKind::NotFound, "gnuplot not found");
        match check_render(path, Err(missing)) {
            Err(Error::Plot { path: failed, reason }) => {
                assert_eq!(failed, path);
                assert!(reason.contains("gnuplot not found"));
            }
            other => panic!("expected a plot error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_gnuplot_exit_status() {
        use std::os::unix::process::ExitStatusExt;

        let path = Path::new("out/drop.svg");
        let exited = process::Output {
            status: process::ExitStatus::from_raw(1 << 8), //exit code 1
            stdout: Vec::new(),
            stderr: b"cannot open file".to_vec(),
        };
        match check_render(path, Ok(exited)) {
            Err(Error::Plot { path: failed, reason }) => {
                assert_eq!(failed, path);
                assert_eq!(reason, "cannot open file");
            }
            other => panic!("expected a plot error, got {other:?}"),
        }

        let rendered = process::Output {
            status: process::ExitStatus::from_raw(0),
            stdout: Vec::new(),
            stderr: Vec::new(),
        };
        assert!(check_render(path, Ok(rendered)).is_ok());
    }

    #[test]
    fn test_plot_comparison() {
        with_scratch_dir(&mut |dir: &Path| {
            let path = dir.join("add.svg");
            let series = Series {
                label: String::from("postgres"),
                points: vec![
                    (1.0, Summary { mean: 0.2, min: 0.1, max: 0.3 }),
                    (2.0, Summary { mean: 0.4, min: 0.3, max: 0.6 }),
                ],
            };
            //renders when gnuplot is installed, otherwise names the figure it failed on
            match plot_comparison(&path, "Added Columns", &[series]) {
                Ok(()) => assert!(path.exists()),
                Err(Error::Plot { path: failed, .. }) => assert_eq!(failed, path),
                Err(other) => panic!("expected a plot error, got {other:?}"),
            }
        });
    }
}
