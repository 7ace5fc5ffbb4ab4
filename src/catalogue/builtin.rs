//! Built-in SALOME extension catalogue.

use super::ExtensionRecord;

/// Returns the built-in records in their declared order.
pub(super) fn records() -> Vec<ExtensionRecord> {
    vec![
        ExtensionRecord::new(
            "salome.geometry",
            "Geometry Module",
            "9.11.0",
            "CEA/DEN",
            "Advanced CAD geometry creation and edition (BREP, STEP, IGES).",
            &["geometry", "cad", "brep", "step"],
            4.8,
            125_000,
        ),
        ExtensionRecord::new(
            "salome.mesh",
            "Mesh Module",
            "9.11.0",
            "CEA/DEN",
            "Automatic and manual meshing with NETGEN, MG-Tetra and more.",
            &["mesh", "netgen", "fea", "hexa"],
            4.7,
            118_000,
        ),
        ExtensionRecord::new(
            "salome.paravis",
            "ParaVis — ParaView Integration",
            "9.11.0",
            "CEA/DEN",
            "Embeds ParaView post-processing directly in SALOME.",
            &["visualization", "post-processing", "paraview", "vtu"],
            4.9,
            99_000,
        ),
        ExtensionRecord::new(
            "salome.smesh_algo",
            "Advanced Meshing Algorithms",
            "2.4.1",
            "EDF R&D",
            "Extra meshing algorithms: quadrangles, prisms, hexahedra.",
            &["mesh", "algorithm", "hex", "prism"],
            4.5,
            45_000,
        ),
        ExtensionRecord::new(
            "salome.eficas",
            "Eficas — Command File Editor",
            "7.8.0",
            "EDF R&D",
            "Graphical editor for Code_Aster and Code_Saturne command files.",
            &["editor", "aster", "saturne", "fea"],
            4.3,
            33_000,
        ),
        ExtensionRecord::new(
            "salome.jobmanager",
            "Job Manager",
            "9.11.0",
            "CEA/DEN",
            "Submit and monitor HPC jobs directly from SALOME.",
            &["hpc", "slurm", "job", "cluster"],
            4.1,
            28_000,
        ),
        ExtensionRecord::new(
            "salome.yacs",
            "YACS — Workflow Engine",
            "9.11.0",
            "CEA/DEN",
            "Graphical workflow and coupling engine for multi-physics simulations.",
            &["workflow", "coupling", "python", "dataflow"],
            4.4,
            52_000,
        ),
        ExtensionRecord::new(
            "salome.hexablock",
            "HexaBlock — Structured Meshing",
            "9.6.0",
            "CEA/DEN",
            "Block-structured hexahedral mesh generation.",
            &["mesh", "hexa", "structured", "block"],
            4.2,
            17_000,
        ),
        ExtensionRecord::new(
            "community.gmsh_plugin",
            "GMSH Plugin",
            "1.3.0",
            "Community",
            "Integrate the GMSH mesher as an alternative mesh engine.",
            &["mesh", "gmsh", "community", "triangle"],
            4.6,
            41_000,
        ),
        ExtensionRecord::new(
            "community.opencascade_viewer",
            "OCC Enhanced Viewer",
            "0.9.5",
            "Community",
            "Extended OpenCASCADE 3-D viewer with advanced display options.",
            &["viewer", "opencascade", "3d", "display"],
            3.9,
            9_800,
        ),
        ExtensionRecord::new(
            "salome.shaper",
            "Shaper — Parametric CAD",
            "9.11.0",
            "CEA/DEN",
            "Parametric, feature-based CAD modeller integrated in SALOME.",
            &["geometry", "parametric", "cad", "feature"],
            4.7,
            71_000,
        ),
        ExtensionRecord::new(
            "salome.fields",
            "Fields Module",
            "9.11.0",
            "CEA/DEN",
            "Management and manipulation of simulation result fields.",
            &["post-processing", "fields", "medfile", "results"],
            4.5,
            38_000,
        ),
        ExtensionRecord::new(
            "community.code_aster_wizard",
            "Code_Aster Setup Wizard",
            "2.0.3",
            "Hamid Bahai / Community",
            "Step-by-step wizard to configure Code_Aster FEA studies in SALOME.",
            &["aster", "fea", "wizard", "setup"],
            4.0,
            14_200,
        ),
        ExtensionRecord::new(
            "community.python_console_plus",
            "Python Console+",
            "1.1.0",
            "Community",
            "Enhanced Python console with auto-completion and history search.",
            &["python", "console", "scripting", "ide"],
            4.4,
            22_000,
        ),
        ExtensionRecord::new(
            "salome.documentation",
            "Documentation Browser",
            "9.11.0",
            "CEA/DEN",
            "Integrated offline documentation browser for all SALOME modules.",
            &["documentation", "help", "browser"],
            4.0,
            55_000,
        ),
    ]
}
