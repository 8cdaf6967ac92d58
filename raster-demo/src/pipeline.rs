//! The filter pipeline: apply every filter to a source raster, in order.

use raster_filters::{
    Raster, RasterError, blur, make_aqua_with, make_gradient_with, red_shift, rotate_right,
};
use raster_io::{DisplayError, RasterSink};
use tracing::{debug, info};

/// A filter result paired with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub label: &'static str,
    pub raster: Raster,
}

impl Panel {
    fn new(label: &'static str, raster: Raster) -> Self {
        Self { label, raster }
    }
}

/// Run every filter and return the results in display order:
/// Original, Red, Blurred, Gradient, Aqua, Rotated.
///
/// Synthesized rasters take the source dimensions. Rotation requires a
/// square source; anything else fails the whole run.
pub fn run_pipeline(source: &Raster, red_shift_amount: i32) -> Result<Vec<Panel>, RasterError> {
    let dims = source.dimensions();
    info!(
        height = dims.height(),
        width = dims.width(),
        red_shift_amount,
        "Running filter pipeline"
    );

    let panels = vec![
        Panel::new("Original", source.clone()),
        Panel::new("Red", red_shift(source, red_shift_amount)),
        Panel::new("Blurred", blur(source)),
        Panel::new("Gradient", make_gradient_with(dims)),
        Panel::new("Aqua", make_aqua_with(dims)),
        Panel::new("Rotated", rotate_right(source)?),
    ];

    debug!(panels = panels.len(), "Filter pipeline complete");
    Ok(panels)
}

/// Hand every panel to every sink, panel by panel.
pub fn display_all(
    panels: &[Panel],
    sinks: &mut [&mut dyn RasterSink],
) -> Result<(), DisplayError> {
    for panel in panels {
        for sink in sinks.iter_mut() {
            sink.display(&panel.raster, panel.label)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster_filters::{Dimensions, GREEN, RED};
    use raster_io::ContactSheet;

    fn create_source(size: usize) -> Raster {
        let dims = Dimensions::new(size, size).unwrap();
        let data = (0..dims.len()).map(|i| (i * 13 % 256) as u8).collect();
        Raster::from_raw(dims, data).unwrap()
    }

    #[test]
    fn test_pipeline_order_and_labels() {
        let panels = run_pipeline(&create_source(8), 100).unwrap();
        let labels: Vec<_> = panels.iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            ["Original", "Red", "Blurred", "Gradient", "Aqua", "Rotated"]
        );
    }

    #[test]
    fn test_pipeline_results() {
        let source = create_source(8);
        let panels = run_pipeline(&source, 100).unwrap();

        assert_eq!(panels[0].raster, source);
        assert_eq!(panels[1].raster, red_shift(&source, 100));
        assert_eq!(panels[2].raster, blur(&source));
        assert_eq!(panels[3].raster[(3, 0, RED)], 6);
        assert_eq!(panels[4].raster[(7, 7, GREEN)], 128);
        assert_eq!(panels[5].raster, rotate_right(&source).unwrap());
        assert!(panels.iter().all(|p| p.raster.dimensions() == source.dimensions()));
    }

    #[test]
    fn test_pipeline_rejects_non_square_source() {
        let source = Raster::new(Dimensions::new(4, 5).unwrap());
        assert_eq!(
            run_pipeline(&source, 0),
            Err(RasterError::InvalidDimensions {
                height: 4,
                width: 5
            })
        );
    }

    #[test]
    fn test_display_all_feeds_every_sink() {
        let panels = run_pipeline(&create_source(4), 10).unwrap();
        let mut first = ContactSheet::new(0);
        let mut second = ContactSheet::new(2);

        let mut sinks: [&mut dyn RasterSink; 2] = [&mut first, &mut second];
        display_all(&panels, &mut sinks).unwrap();

        assert_eq!(first.len(), 6);
        assert_eq!(second.len(), 6);
        assert_eq!(first.render().unwrap().dimensions(), (24, 4));
        assert_eq!(second.render().unwrap().dimensions(), (34, 4));
    }
}
