use anyhow::Result;
use clap::Parser;
use libftest::tools::{push_cgroup_spec, CgroupSpec};

use super::MAX_HIERARCHIES;

#[derive(Parser, Debug)]
pub struct Spec {
    /// Group specifiers, 'controller1,controller2:group'
    #[arg(required = true)]
    specs: Vec<String>,
}

pub fn spec(args: Spec) -> Result<()> {
    for spec in parse_specs(&args.specs)? {
        println!("{:20} {}", spec.controllers.join(","), spec.path);
    }
    Ok(())
}

pub fn parse_specs(args: &[String]) -> Result<Vec<CgroupSpec>> {
    let mut specs = Vec::new();
    for arg in args {
        push_cgroup_spec(&mut specs, arg, MAX_HIERARCHIES)?;
    }
    Ok(specs)
}
