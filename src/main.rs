use clap::Parser;
use memmap2::Mmap;
use std::fs::File;
use std::io::{Error, ErrorKind};

use tamago::save::RECORDS_PER_BOX;
use tamago::{Cover, EggCover, EggUncover, NameCover, SaveFile, Slot, Uncover};

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
enum Args {
    /// Store a file in the save as eggs, writing backwards from the last cell of box 14
    #[command(name = "hide")]
    Hide {
        save: String,
        payload: String,

        /// Use the backup save block instead of the current one
        #[arg(short, long)]
        backup: bool,
    },

    /// Extract the data hidden in the save to a file
    #[command(name = "unhide")]
    Unhide {
        save: String,
        output: String,

        /// Exact number of bytes to extract; the hidden data is padded with zeros
        #[arg(short = 'n', long)]
        num_bytes: Option<usize>,

        #[arg(short, long)]
        backup: bool,
    },

    /// Check whether a file is hidden in the save
    #[command(name = "verify")]
    Verify {
        save: String,
        payload: String,

        #[arg(short, long)]
        backup: bool,
    },

    /// Encode text as base64 and spread it across creature names, starting at box 1
    #[command(name = "names")]
    Names {
        save: String,
        text: String,

        #[arg(short, long)]
        backup: bool,
    },

    /// Print every record in the boxes
    #[command(name = "show")]
    Show {
        save: String,

        #[arg(short, long)]
        backup: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args {
        Args::Hide {
            save,
            payload,
            backup,
        } => {
            hide(&save, &payload, backup)?;
        }
        Args::Unhide {
            save,
            output,
            num_bytes,
            backup,
        } => {
            unhide(&save, &output, num_bytes, backup)?;
        }
        Args::Verify {
            save,
            payload,
            backup,
        } => {
            if !verify(&save, &payload, backup)? {
                return err("The data in the save doesn't match the file");
            }
            println!("Data validated OK!");
        }
        Args::Names { save, text, backup } => {
            names(&save, &text, backup)?;
        }
        Args::Show { save, backup } => {
            show(&save, backup)?;
        }
    }

    println!("Ok");

    Ok(())
}

fn err(msg: &str) -> Result<(), Box<dyn std::error::Error>> {
    Err(Box::new(Error::new(ErrorKind::Other, msg)))
}

fn read(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;

    if file.metadata()?.len() == 0 {
        return Ok(vec![]);
    }

    let slice = &(unsafe { Mmap::map(&file)? }[..]);

    Ok(slice.to_vec())
}

fn open(path: &str, backup: bool) -> Result<(SaveFile, Slot), Box<dyn std::error::Error>> {
    let save = SaveFile::from_bytes(read(path)?)?;

    let slot = if backup {
        save.select_backup()?
    } else {
        save.select_active()?
    };

    Ok((save, slot))
}

fn hide(
    save_path: &str,
    payload_path: &str,
    backup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut save, slot) = open(save_path, backup)?;
    let payload = read(payload_path)?;

    let mut storage = save.box_storage(slot)?;
    let used = EggCover::from(&mut storage).cover(&payload)?;

    std::fs::write(save_path, save.commit(slot, &storage)?)?;

    println!("Hid {} bytes in {} eggs", payload.len(), used);

    Ok(())
}

fn unhide(
    save_path: &str,
    output_path: &str,
    num_bytes: Option<usize>,
    backup: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (save, slot) = open(save_path, backup)?;
    let storage = save.box_storage(slot)?;

    let mut data = EggUncover::from(&storage).extract()?;

    if let Some(n) = num_bytes {
        if n > data.len() {
            return err(&format!(
                "Cannot extract {} bytes; only {} bytes are hidden in this save",
                n,
                data.len()
            ));
        }
        data.truncate(n);
    }

    std::fs::write(output_path, &data)?;

    Ok(())
}

fn verify(
    save_path: &str,
    payload_path: &str,
    backup: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let (save, slot) = open(save_path, backup)?;
    let storage = save.box_storage(slot)?;
    let payload = read(payload_path)?;

    Ok(EggUncover::from(&storage).verify(&payload)?)
}

fn names(save_path: &str, text: &str, backup: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (mut save, slot) = open(save_path, backup)?;
    let mut storage = save.box_storage(slot)?;

    NameCover::from(&mut storage).cover(text.as_bytes())?;

    std::fs::write(save_path, save.commit(slot, &storage)?)?;

    Ok(())
}

fn show(save_path: &str, backup: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (save, slot) = open(save_path, backup)?;
    let storage = save.box_storage(slot)?;

    for (i, record) in storage.records().iter().enumerate() {
        if i % RECORDS_PER_BOX == 0 {
            println!("Box {}", i / RECORDS_PER_BOX + 1);
        }
        println!("{}", record);
    }

    Ok(())
}
