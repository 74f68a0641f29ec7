use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "Open a view by its path, like `/attendance/logs`")]
pub struct Options {
    #[clap(name = "path", help = "Path of the view to open")]
    pub path: String,
}
