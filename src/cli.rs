// Command-line surface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vizkit::info::InfoTopic;
use vizkit::{ChartOptions, VizKind};

/// Build Vega-Lite chart documents from CSV data
#[derive(Parser, Debug)]
#[command(name = "vizkit", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// A bar/column chart
    Bar {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        stack: StackArgs,
        #[command(flatten)]
        bar: BarArgs,
    },
    /// An area chart
    Area {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        stack: StackArgs,
    },
    /// A line chart
    Line {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// A scatterplot
    Scatter {
        #[command(flatten)]
        common: CommonArgs,
        /// The column for mapping the size of each point
        #[arg(short = 's', long)]
        sizevar: Option<String>,
    },
    /// A bar chart of the frequency count of a given variable
    Hist {
        #[command(flatten)]
        common: CommonArgs,
        /// Max number of bins (overridden by -s/--bin-size)
        #[arg(short = 'n', long = "bins")]
        bincount: Option<u32>,
        /// Size of each bin (overrides -n/--bins)
        #[arg(short = 's', long = "bin-size")]
        binstepsize: Option<f64>,
        /// Make a horizontal histogram
        #[arg(short = 'H', long)]
        horizontal: bool,
    },
    /// A heatmap; requires -c/--colorvar
    Heatmap {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// A streamgraph, i.e. a stacked area chart around a centered baseline
    Stream {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// List valid values for aggregates, color schemes, time units or type codes
    Info {
        #[arg(value_enum)]
        topic: InfoTopic,
    },
}

/// Options shared by every chart type
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Input CSV file; '-' or absent reads standard input
    pub input: Option<PathBuf>,

    /// Column for the x axis; defaults to the first column
    #[arg(short = 'x', long)]
    pub xvar: Option<String>,

    /// Column for the y axis; defaults to the second column
    #[arg(short = 'y', long)]
    pub yvar: Option<String>,

    /// Column for mark colors
    #[arg(short = 'c', long)]
    pub colorvar: Option<String>,

    /// Column that splits the chart into a grid of small charts
    #[arg(short = 'g', long = "gridvar")]
    pub facetvar: Option<String>,

    /// Number of grid columns; 0 for unbounded
    #[arg(long = "grid-columns")]
    pub facet_columns: Option<u32>,

    /// Sort the grid by its facet variable
    #[arg(long = "grid-sort", value_parser = ["asc", "desc"], ignore_case = true)]
    pub facet_sort: Option<String>,

    /// Comma-delimited list of colors, e.g. 'deeppink,#555'
    #[arg(short = 'C', long)]
    pub color_list: Option<String>,

    /// Named color scheme; see `vizkit info colorschemes`
    #[arg(long)]
    pub color_scheme: Option<String>,

    /// Hide the legend
    #[arg(long)]
    pub no_legend: bool,

    /// x axis limits as 'min,max'
    #[arg(long, allow_hyphen_values = true)]
    pub xlim: Option<String>,

    /// y axis limits as 'min,max'
    #[arg(long, allow_hyphen_values = true)]
    pub ylim: Option<String>,

    /// Chart title
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Chart height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Chart width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Add pan and zoom to the chart
    #[arg(long)]
    pub interactive: bool,
}

/// Stacking options for bar and area charts
#[derive(Args, Debug, Clone, Default)]
pub struct StackArgs {
    /// Normalize stacked totals to 100%; requires -c/--colorvar
    #[arg(short = 'N', long)]
    pub normalized: bool,

    /// Sort order of the stacked colors
    #[arg(long, value_parser = ["asc", "desc"], ignore_case = true)]
    pub color_sort: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BarArgs {
    /// Make a horizontal bar chart
    #[arg(short = 'H', long)]
    pub horizontal: bool,

    /// Sort the x axis by the x, y or color channel; prefix '-' to reverse
    #[arg(long = "x-sort", allow_hyphen_values = true)]
    pub x_sort: Option<String>,
}

/// What the command line asks for
pub enum Request {
    Chart {
        kind: VizKind,
        options: ChartOptions,
        input: Option<PathBuf>,
    },
    Info(InfoTopic),
}

impl CommonArgs {
    fn into_options(self) -> (ChartOptions, Option<PathBuf>) {
        let options = ChartOptions {
            xvar: self.xvar,
            yvar: self.yvar,
            colorvar: self.colorvar,
            facetvar: self.facetvar,
            facet_columns: self.facet_columns,
            facet_sort: self.facet_sort,
            color_list: self.color_list,
            color_scheme: self.color_scheme,
            no_legend: self.no_legend,
            xlim: self.xlim,
            ylim: self.ylim,
            title: self.title,
            height: self.height,
            width: self.width,
            is_interactive: self.interactive,
            ..Default::default()
        };
        (options, self.input)
    }
}

impl StackArgs {
    fn apply(self, options: &mut ChartOptions) {
        options.normalized = self.normalized;
        options.color_sort = self.color_sort;
    }
}

impl Command {
    pub fn into_request(self) -> Request {
        let (kind, (mut options, input)) = match self {
            Command::Info { topic } => return Request::Info(topic),
            Command::Bar { common, stack, bar } => {
                let (mut options, input) = common.into_options();
                stack.apply(&mut options);
                options.is_horizontal = bar.horizontal;
                options.sortx_var = bar.x_sort;
                (VizKind::Bar, (options, input))
            }
            Command::Area { common, stack } => {
                let (mut options, input) = common.into_options();
                stack.apply(&mut options);
                (VizKind::Area, (options, input))
            }
            Command::Line { common } => (VizKind::Line, common.into_options()),
            Command::Scatter { common, sizevar } => {
                let (mut options, input) = common.into_options();
                options.sizevar = sizevar;
                (VizKind::Scatter, (options, input))
            }
            Command::Hist {
                common,
                bincount,
                binstepsize,
                horizontal,
            } => {
                let (mut options, input) = common.into_options();
                options.bincount = bincount;
                options.binstepsize = binstepsize;
                options.is_horizontal = horizontal;
                (VizKind::Histogram, (options, input))
            }
            Command::Heatmap { common } => (VizKind::Heatmap, common.into_options()),
            Command::Stream { common } => (VizKind::Stream, common.into_options()),
        };

        // lowercase the sort terms accepted case-insensitively by clap
        for term in [&mut options.facet_sort, &mut options.color_sort] {
            if let Some(t) = term.as_mut() {
                *t = t.to_ascii_lowercase();
            }
        }

        Request::Chart {
            kind,
            options,
            input,
        }
    }
}
