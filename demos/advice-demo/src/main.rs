use anyhow::Context;
use aspect_advice::prelude::*;
use aspect_advice::{inventory, MethodAdvices};
use std::path::PathBuf;
use std::sync::Arc;

// ==================== 编译时声明的通知 ====================

inventory::submit! {
    AdviceSubmission::new(
        "metrics",
        AdviceKind::After,
        "UserService@save",
        30,
        || Weaver::reference("MetricsAspect@record"),
    )
}

// ==================== 业务对象 ====================

#[derive(Debug)]
struct UserService {
    table: &'static str,
}

impl UserService {
    fn save(&self, name: &str) -> String {
        format!("saved '{}' into {}", name, self.table)
    }
}

/// 模拟织入引擎：按 order 依次执行某个连接点类型的通知
fn run_advices(advices: &MethodAdvices, kind: AdviceKind, jp: &JoinPoint) {
    let Some(entries) = advices.get(&kind) else {
        return;
    };

    let mut entries: Vec<(&String, &AdviceEntry)> = entries.iter().collect();
    entries.sort_by_key(|(_, entry)| entry.order);

    for (id, entry) in entries {
        match &entry.weaver {
            Weaver::Callable(f) => {
                tracing::info!("[{}] {} -> inline weaver", kind, id);
                f(jp);
            }
            Weaver::Reference(name) => {
                tracing::info!("[{}] {} -> {} (order {})", kind, id, name, entry.order);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("advice.toml"));

    let config = AdviceConfig::from_file(&path)
        .with_context(|| format!("Failed to load advice config from {:?}", path))?;
    config.logging.clone().merge_env().init()?;

    let mut registry = AdviceRegistry::new();
    registry.auto_load();
    registry.load_config(&config);
    registry.before_with_order(
        "trace",
        "UserService@save",
        Weaver::callable(|jp| {
            let name = jp.get_args::<String>().map(String::as_str).unwrap_or("?");
            tracing::info!("  → entering {} with name={}", jp, name);
        }),
        1,
    );

    registry.set_object_resolver(ObjectResolver::new(|class_name| match class_name {
        "UserService" => Ok(Arc::new(UserService { table: "users" }) as ResolvedObject),
        other => Err(anyhow::anyhow!("No object for class '{}'", other)),
    }));

    tracing::info!("Registry holds {} advice entr(ies)", registry.len());
    for (class_name, methods) in registry.all() {
        for (method_name, kinds) in methods {
            let kinds: Vec<&str> = kinds.keys().map(AdviceKind::as_str).collect();
            tracing::info!("  {}@{}: {}", class_name, method_name, kinds.join(", "));
        }
    }

    let jp = JoinPoint::new("UserService", "save").with_args("alice".to_string());
    let advices = registry.get_join_point(&jp);

    let resolver = registry
        .object_resolver()
        .context("Object resolver not configured")?;
    let object = resolver.resolve(&jp.class_name)?;
    let service = object
        .downcast_ref::<UserService>()
        .context("Resolved object is not a UserService")?;

    run_advices(advices, AdviceKind::Before, &jp);
    run_advices(advices, AdviceKind::Around, &jp);
    tracing::info!("  {}", service.save("alice"));
    run_advices(advices, AdviceKind::After, &jp);
    tracing::info!("{} finished in {:?}", jp, jp.elapsed());

    Ok(())
}
