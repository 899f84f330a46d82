use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use doi_checker::utils::logging;
use doi_checker::{App, Config, PipelineKind};
use std::path::PathBuf;

/// DOI 批量检查工具
#[derive(Parser, Debug)]
#[command(author, version, about = "批量检查与提取文章 DOI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 通过 doi.org 检查 DOI（输入每行 `pid;doi`）
    Check(CommonArgs),
    /// 从 ArticleMeta 提取 DOI（输入每行一个 PID）
    Extract {
        #[command(flatten)]
        common: CommonArgs,

        /// 集合缩写
        #[arg(long)]
        collection: Option<String>,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// 输入文件
    input: PathBuf,

    /// 输出文件（追加写入）
    output: PathBuf,

    /// 同时打开的连接数上限
    #[arg(short, long)]
    limit: Option<usize>,

    /// 每处理多少条输出一次进度
    #[arg(short, long)]
    milestone: Option<u64>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(milestone) = self.milestone {
            config.milestone = Some(milestone);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    let cli = Cli::parse();

    let (kind, args, config) = match cli.command {
        Command::Check(args) => {
            let config = args.load_config()?;
            (PipelineKind::Check, args, config)
        }
        Command::Extract { common, collection } => {
            let mut config = common.load_config()?;
            if let Some(collection) = collection {
                config.collection = collection;
            }
            (PipelineKind::Extract, common, config)
        }
    };

    App::new(config, kind, args.input, args.output).run().await?;

    Ok(())
}
