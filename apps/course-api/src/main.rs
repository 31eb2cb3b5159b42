use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = course_api::Args::parse();

	course_api::run(args).await
}
