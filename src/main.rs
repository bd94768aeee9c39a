use std::path::PathBuf;

use clap::{Parser, Subcommand};
use multicyclone_simulator::{app, config, cyclone::EfficiencyModel, presets::Preset};

#[derive(Parser)]
#[command(name = "multicyclone_simulator")]
#[command(about = "Cyclone / multi-cyclone dust collector performance calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 계산 입력 덮어쓰기 옵션. 지정하지 않은 값은 config.toml을 따른다.
#[derive(clap::Args)]
struct DesignArgs {
    /// epa, cement-kiln, power-plant, custom
    #[arg(long)]
    preset: Option<String>,
    /// lapple, cement, stairmand
    #[arg(long)]
    model: Option<String>,
    /// 압력손실 계수 K
    #[arg(long)]
    loss_coefficient: Option<f64>,
    /// 직렬 단수
    #[arg(long)]
    series: Option<u32>,
    /// 병렬 대수
    #[arg(long)]
    parallel: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// 성능 지표와 구간별 집진 표를 출력한다
    Evaluate {
        #[command(flatten)]
        design: DesignArgs,
        /// 목표 입경 [um]
        #[arg(long)]
        target: Option<f64>,
        /// 구간별 집진 표 CSV 저장 경로
        #[arg(long)]
        csv: Option<PathBuf>,
        /// 성능 요약 CSV 저장 경로
        #[arg(long)]
        summary: Option<PathBuf>,
    },
    /// 입경별 효율 곡선을 CSV로 출력한다
    Curve {
        #[command(flatten)]
        design: DesignArgs,
        /// 최소 입경 [um]
        #[arg(long)]
        min: Option<f64>,
        /// 최대 입경 [um]
        #[arg(long)]
        max: Option<f64>,
        /// 샘플 수
        #[arg(long)]
        points: Option<usize>,
        /// 출력 파일 (없으면 표준 출력)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// 프리셋 목록
    Presets,
    /// 단위 변환: convert <kind> <value> <from> <to>
    Convert {
        kind: String,
        value: f64,
        from: String,
        to: String,
    },
    /// 대화형 메뉴
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    // 보고서는 표준 출력, 로그는 표준 오류로 보낸다.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn apply_design_args(cfg: &mut config::Config, args: DesignArgs) -> Result<(), app::AppError> {
    if let Some(p) = args.preset {
        cfg.preset = Preset::parse(&p)
            .ok_or_else(|| app::AppError::InvalidArgument(format!("알 수 없는 프리셋: {p}")))?;
    }
    if let Some(m) = args.model {
        cfg.model = Some(
            EfficiencyModel::parse(&m)
                .ok_or_else(|| app::AppError::InvalidArgument(format!("알 수 없는 모델: {m}")))?,
        );
    }
    if args.loss_coefficient.is_some() {
        cfg.loss_coefficient = args.loss_coefficient;
    }
    if let Some(s) = args.series {
        cfg.series = s;
    }
    if let Some(p) = args.parallel {
        cfg.parallel = Some(p);
    }
    Ok(())
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Evaluate {
            design,
            target,
            csv,
            summary,
        } => {
            apply_design_args(&mut cfg, design)?;
            if target.is_some() {
                cfg.target_diameter_um = target;
            }
            app::evaluate(&cfg, csv.as_deref(), summary.as_deref())?;
        }
        Commands::Curve {
            design,
            min,
            max,
            points,
            out,
        } => {
            apply_design_args(&mut cfg, design)?;
            cfg.curve_min_um = min.unwrap_or(cfg.curve_min_um);
            cfg.curve_max_um = max.unwrap_or(cfg.curve_max_um);
            cfg.curve_points = points.unwrap_or(cfg.curve_points);
            app::curve(&cfg, out.as_deref())?;
        }
        Commands::Presets => app::list_presets(),
        Commands::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let result = app::convert(&kind, value, &from, &to)?;
            println!("{result} {to}");
        }
        Commands::Interactive => app::run(&mut cfg)?,
    }
    Ok(())
}
