use crate::commands::{print_json, Context};
use crate::util::{format_timestamp_datetime, now_utc, parse_person_id};
use anyhow::Result;
use clap::Args;
use nameplate_core::dto::PersonDto;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

pub fn add_person(ctx: &Context<'_>, args: AddArgs) -> Result<()> {
    let draft = ctx.config.naming.draft(&args.name)?;
    let person = ctx.store.people().create(now_utc(), draft)?;

    if ctx.json {
        print_json(&PersonDto::from(person))?;
    } else {
        println!("created {} {} {}", person.id, person.name, person.email);
    }
    Ok(())
}

pub fn list_people(ctx: &Context<'_>) -> Result<()> {
    let people = ctx.store.people().list_all()?;

    if ctx.json {
        let dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();
        print_json(&dtos)?;
        return Ok(());
    }

    for person in people {
        println!("{}\t{}\t{}", person.id, person.name, person.email);
    }
    Ok(())
}

pub fn show_person(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_person_id(&args.id)?;
    let person = ctx.store.people().require(id)?;

    if ctx.json {
        print_json(&PersonDto::from(person))?;
        return Ok(());
    }

    println!("id: {}", person.id);
    println!("name: {}", person.name);
    println!("email: {}", person.email);
    println!("raw_name: {:?}", person.raw_name);
    println!(
        "created_at: {}",
        format_timestamp_datetime(person.created_at)
    );
    Ok(())
}
